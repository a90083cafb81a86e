//! Virtual node storage, sorted by position once finalized
//! 虚拟节点存储，finalize 后按位置有序

use std::ops::Deref;

use hipstr::HipStr;

/// One virtual node on the ring
/// 环上的一个虚拟节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
  pub pos: u32,
  pub node: HipStr<'static>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Ticks(Vec<Tick>);

impl Ticks {
  #[inline]
  pub fn push(&mut self, tick: Tick) {
    self.0.push(tick);
  }

  #[inline]
  pub fn reserve(&mut self, n: usize) {
    self.0.reserve(n);
  }

  /// Stable sort, equal positions keep insertion order
  /// 稳定排序，相同位置保持插入顺序
  #[inline]
  pub fn sort(&mut self) {
    self.0.sort_by_key(|t| t.pos);
  }

  /// Index of the first tick with `pos >= pos`, `len()` if none
  /// 第一个 `pos >= pos` 的下标，不存在时为 `len()`
  #[inline]
  pub fn first_ge(&self, pos: u32) -> usize {
    self.0.partition_point(|t| t.pos < pos)
  }

  /// Exact `(pos, node)` match not yet marked in `hit`
  /// 精确匹配 `(pos, node)` 且未在 `hit` 中标记
  pub fn find(&self, pos: u32, node: &str, hit: &[bool]) -> Option<usize> {
    let start = self.first_ge(pos);
    self.0[start..]
      .iter()
      .take_while(|t| t.pos == pos)
      .enumerate()
      .map(|(offset, t)| (start + offset, t))
      .find(|(idx, t)| !hit[*idx] && t.node.as_str() == node)
      .map(|(idx, _)| idx)
  }

  /// Remove every tick marked in `hit` in one pass, order preserved
  /// 单次遍历移除 `hit` 中标记的元素，保持顺序
  pub fn drain_hit(&mut self, hit: &[bool]) {
    let mut idx = 0;
    self.0.retain(|_| {
      let keep = !hit[idx];
      idx += 1;
      keep
    });
  }
}

impl Deref for Ticks {
  type Target = [Tick];

  #[inline]
  fn deref(&self) -> &Self::Target {
    &self.0
  }
}
