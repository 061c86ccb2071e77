use collab_core::rng::{derive_substream_seed, RngHandle};
use rand::RngCore;

#[test]
fn rng_emits_reproducible_sequence() {
    let mut rng_a = RngHandle::from_seed(4071);
    let mut rng_b = RngHandle::from_seed(4071);

    let seq_a: Vec<u64> = (0..100).map(|_| rng_a.next_u64()).collect();
    let seq_b: Vec<u64> = (0..100).map(|_| rng_b.next_u64()).collect();

    assert_eq!(seq_a, seq_b);
}

#[test]
fn substreams_diverge_from_master() {
    assert_ne!(derive_substream_seed(4071, 0), derive_substream_seed(4071, 1));
    let mut master = RngHandle::from_seed(4071);
    let mut branch = RngHandle::substream(4071, 1);
    assert_ne!(master.next_u64(), branch.next_u64());
}

#[test]
fn for_stream_without_substream_is_the_master_sequence() {
    let mut direct = RngHandle::from_seed(4071);
    let mut routed = RngHandle::for_stream(4071, None);
    assert_eq!(direct.next_u64(), routed.next_u64());

    let mut derived = RngHandle::for_stream(4071, Some(3));
    let mut explicit = RngHandle::substream(4071, 3);
    assert_eq!(derived.next_u64(), explicit.next_u64());
}
