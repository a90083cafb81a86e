use std::{collections::HashMap, hash::Hasher};

use aok::{OK, Void};
use log::info;
use murmur3::{DEFAULT_SEED, Murmur3, Seed, hash32};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

/// Published MurmurHash3_x86_32 vectors (seed, input, hash)
/// 公开的 MurmurHash3_x86_32 测试向量（种子，输入，哈希）
const VECTORS: &[(u32, &[u8], u32)] = &[
  (0, b"", 0),
  (1, b"", 0x514e_28b7),
  (0xffff_ffff, b"", 0x81f1_6f39),
  (0, &[0xff, 0xff, 0xff, 0xff], 0x7629_3b50),
  (0, &[0x21, 0x43, 0x65, 0x87], 0xf55b_516b),
  (0x5082_edee, &[0x21, 0x43, 0x65, 0x87], 0x2362_f9de),
  (0, &[0x21, 0x43, 0x65], 0x7e4a_8634),
  (0, &[0x21, 0x43], 0xa0f7_b07a),
  (0, &[0x21], 0x7266_1cf4),
  (0, &[0, 0, 0, 0], 0x2362_f9de),
  (0, &[0, 0, 0], 0x85f0_b427),
  (0, &[0, 0], 0x30f4_c306),
  (0, &[0], 0x514e_28b7),
  (0x9747_b28c, b"aaaa", 0x5a97_808a),
  (0x9747_b28c, b"aaa", 0x283e_0130),
  (0x9747_b28c, b"aa", 0x5d21_1726),
  (0x9747_b28c, b"a", 0x7fa0_9ea6),
  (0x9747_b28c, b"abcd", 0xf047_8627),
  (0x9747_b28c, b"abc", 0xc84a_62dd),
  (0x9747_b28c, b"ab", 0x7487_5592),
  (0x9747_b28c, b"Hello, world!", 0x2488_4cba),
  (
    0x9747_b28c,
    b"The quick brown fox jumps over the lazy dog",
    0x2fa8_26cd,
  ),
];

#[test]
fn test_reference_vectors() -> Void {
  for &(seed, data, expect) in VECTORS {
    let h = hash32(data, seed);
    info!("> {seed:#x} {data:?} -> {h:#x}");
    assert_eq!(h, expect, "seed {seed:#x} data {data:?}");
  }
  OK
}

#[test]
fn test_deterministic() -> Void {
  for data in [&b""[..], &b"foo"[..], &b"consistent hashing"[..]] {
    assert_eq!(hash32(data, 0), hash32(data, 0));
    assert_eq!(hash32(data, 42), hash32(data, 42));
  }
  assert_eq!(hash32(b"", 0), 0);
  OK
}

/// Different seeds give different hashes
/// 不同种子得到不同哈希
#[test]
fn test_seed_matters() -> Void {
  assert_ne!(hash32(b"foo", 0), hash32(b"foo", 1));
  assert_eq!(hash32(b"foo", DEFAULT_SEED), hash32(b"foo", 1));
  OK
}

/// Streaming writes split at any point equal the one-shot hash
/// 流式写入在任意位置切分都与一次性哈希一致
#[test]
fn test_streaming_splits() -> Void {
  let data = b"The quick brown fox jumps over the lazy dog";
  let expect = hash32(data, 0x9747_b28c);
  for a in 0..=data.len() {
    for b in a..=data.len() {
      let mut h = Murmur3::new(0x9747_b28c);
      h.write(&data[..a]);
      h.write(&data[a..b]);
      h.write(&data[b..]);
      assert_eq!(h.finish32(), expect, "split {a} {b}");
      assert_eq!(h.finish(), expect as u64);
    }
  }

  let mut h = Murmur3::new(0);
  for byte in data {
    h.write(&[*byte]);
  }
  assert_eq!(h.finish32(), hash32(data, 0));
  OK
}

#[test]
fn test_streaming_vectors() -> Void {
  for &(seed, data, expect) in VECTORS {
    let mut h = Murmur3::new(seed);
    h.write(data);
    assert_eq!(h.finish32(), expect);
  }
  assert_eq!(Murmur3::default().finish32(), hash32(b"", DEFAULT_SEED));
  OK
}

/// Usable as a HashMap hasher
/// 可用作 HashMap 的哈希器
#[test]
fn test_build_hasher() -> Void {
  let mut map: HashMap<&str, u32, Seed> = HashMap::with_hasher(Seed(7));
  for (i, k) in ["a", "b", "c", "d"].into_iter().enumerate() {
    map.insert(k, i as u32);
  }
  assert_eq!(map.get("c"), Some(&2));
  assert_eq!(map.len(), 4);
  assert_eq!(Seed::default(), Seed(DEFAULT_SEED));
  OK
}
