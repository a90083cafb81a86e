//! Ring placement hash
//! 环定位哈希
//!
//! SHA-1 of the input, last 4 bytes read big-endian.
//! Must stay bit-compatible with existing ketama deployments.
//! 对输入求 SHA-1，取后 4 字节按大端读取。
//! 必须与已有 ketama 部署逐位兼容。

use std::fmt::Write;

use sha1::{Digest, Sha1};

/// Position of a key on the ring
/// 键在环上的位置
#[inline]
pub fn pos(key: &[u8]) -> u32 {
  let d = Sha1::digest(key);
  // byte[19] | byte[18]<<8 | byte[17]<<16 | byte[16]<<24
  u32::from_be_bytes([d[16], d[17], d[18], d[19]])
}

/// Position of the `i`-th virtual node of `name`, hashed as `"{name}:{i}"`
/// `name` 的第 `i` 个虚拟节点位置，哈希输入为 `"{name}:{i}"`
#[inline]
pub fn vnode_pos(name: &str, i: u32) -> u32 {
  let mut buf = String::with_capacity(name.len() + 11);
  vnode_pos_buf(&mut buf, name, i)
}

/// Same as [`vnode_pos`], reusing `buf` across calls
/// 同 [`vnode_pos`]，复用 `buf`
#[inline]
pub(crate) fn vnode_pos_buf(buf: &mut String, name: &str, i: u32) -> u32 {
  buf.clear();
  // Writing to a String never fails
  // 写入 String 不会失败
  let _ = write!(buf, "{name}:{i}");
  pos(buf.as_bytes())
}
