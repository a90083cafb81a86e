#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

//! MurmurHash3 x86 32-bit
//! MurmurHash3 x86 32 位
//!
//! Bit-compatible with the reference `MurmurHash3_x86_32`. The seed is always
//! explicit, there is no shared mutable default.
//! 与参考实现 `MurmurHash3_x86_32` 逐位兼容。种子总是显式传入，没有共享的可变默认值。
//!
//! ```
//! assert_eq!(murmur3::hash32(b"", 0), 0);
//! assert_eq!(murmur3::hash32(b"", 1), 0x514e_28b7);
//! ```

use core::hash::{BuildHasher, Hasher};

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;
const C3: u32 = 0x85eb_ca6b;
const C4: u32 = 0xc2b2_ae35;
const R1: u32 = 15;
const R2: u32 = 13;
const M: u32 = 5;
const N: u32 = 0xe654_6b64;

/// Historical default seed, kept as a constant
/// 历史默认种子，以常量形式保留
pub const DEFAULT_SEED: u32 = 1;

#[inline(always)]
fn mix_k(k: u32) -> u32 {
  k.wrapping_mul(C1).rotate_left(R1).wrapping_mul(C2)
}

#[inline(always)]
fn mix_h(h: u32, k: u32) -> u32 {
  (h ^ mix_k(k))
    .rotate_left(R2)
    .wrapping_mul(M)
    .wrapping_add(N)
}

/// Tail bytes (0..=3) mixed in without the rotate / multiply-add step
/// 尾部字节（0..=3）混入时不做旋转与乘加
#[inline(always)]
fn mix_tail(h: u32, tail: &[u8]) -> u32 {
  if tail.is_empty() {
    return h;
  }
  let mut k = 0u32;
  for (i, b) in tail.iter().enumerate() {
    k |= (*b as u32) << (8 * i);
  }
  h ^ mix_k(k)
}

#[inline(always)]
fn fmix(mut h: u32, len: usize) -> u32 {
  // Reference mixes the length as a 32-bit value
  // 参考实现按 32 位混入长度
  h ^= len as u32;
  h ^= h >> 16;
  h = h.wrapping_mul(C3);
  h ^= h >> 13;
  h = h.wrapping_mul(C4);
  h ^ (h >> 16)
}

/// Hash `data` with `seed`
/// 使用 `seed` 对 `data` 求哈希
#[inline]
pub fn hash32(data: &[u8], seed: u32) -> u32 {
  let mut h = seed;
  let mut blocks = data.chunks_exact(4);
  for b in &mut blocks {
    h = mix_h(h, u32::from_le_bytes([b[0], b[1], b[2], b[3]]));
  }
  fmix(mix_tail(h, blocks.remainder()), data.len())
}

/// Streaming hasher, same output as [`hash32`] over the concatenated writes
/// 流式哈希器，输出等同于对所有写入拼接后调用 [`hash32`]
///
/// `finish` widens the 32-bit hash to `u64`.
/// `finish` 将 32 位哈希扩展为 `u64`。
#[derive(Debug, Clone, Copy)]
pub struct Murmur3 {
  h: u32,
  tail: [u8; 4],
  tail_len: usize,
  len: usize,
}

impl Murmur3 {
  #[inline]
  pub fn new(seed: u32) -> Self {
    Self {
      h: seed,
      tail: [0; 4],
      tail_len: 0,
      len: 0,
    }
  }

  /// Current 32-bit hash of everything written so far
  /// 已写入全部数据的 32 位哈希
  #[inline]
  pub fn finish32(&self) -> u32 {
    fmix(mix_tail(self.h, &self.tail[..self.tail_len]), self.len)
  }
}

impl Default for Murmur3 {
  #[inline]
  fn default() -> Self {
    Self::new(DEFAULT_SEED)
  }
}

impl Hasher for Murmur3 {
  fn write(&mut self, mut bytes: &[u8]) {
    self.len += bytes.len();

    if self.tail_len > 0 {
      let take = (4 - self.tail_len).min(bytes.len());
      self.tail[self.tail_len..self.tail_len + take].copy_from_slice(&bytes[..take]);
      self.tail_len += take;
      bytes = &bytes[take..];
      if self.tail_len < 4 {
        return;
      }
      self.h = mix_h(self.h, u32::from_le_bytes(self.tail));
      self.tail_len = 0;
    }

    let mut blocks = bytes.chunks_exact(4);
    for b in &mut blocks {
      self.h = mix_h(self.h, u32::from_le_bytes([b[0], b[1], b[2], b[3]]));
    }
    let rest = blocks.remainder();
    self.tail[..rest.len()].copy_from_slice(rest);
    self.tail_len = rest.len();
  }

  #[inline]
  fn finish(&self) -> u64 {
    self.finish32() as u64
  }
}

/// [`BuildHasher`] carrying the seed
/// 携带种子的 [`BuildHasher`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed(pub u32);

impl Default for Seed {
  #[inline]
  fn default() -> Self {
    Self(DEFAULT_SEED)
  }
}

impl BuildHasher for Seed {
  type Hasher = Murmur3;

  #[inline]
  fn build_hasher(&self) -> Murmur3 {
    Murmur3::new(self.0)
  }
}
