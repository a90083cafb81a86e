//! Hash ring
//! 哈希环
//!
//! Mutations leave the ring unsorted; `finalize` sorts it.
//! Lookups and removals only run on a finalized ring.
//! 修改后环处于未排序状态，`finalize` 负责排序。
//! 查找与删除只在已排序的环上进行。

use hipstr::HipStr;
use log::debug;

use crate::{
  Conf, Error, ParsedConf, Result, Tick,
  hash::{self, vnode_pos_buf},
  ticks::Ticks,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
  Unsorted,
  Finalized,
}

/// Consistent hash ring
/// 一致性哈希环
///
/// Mutators take `&mut self`. A finalized ring can be shared read-only,
/// e.g. rebuilt on a clone and swapped behind an `Arc`.
/// 修改操作需要 `&mut self`。已排序的环可只读共享，
/// 例如在副本上重建后通过 `Arc` 替换。
#[derive(Debug, Clone)]
pub struct Ring {
  replicas: u32,
  ticks: Ticks,
  state: State,
}

impl Ring {
  /// Create an empty ring with `replicas` virtual nodes per unit of multiplier
  /// 创建空环，每单位倍数对应 `replicas` 个虚拟节点
  pub fn new(replicas: u32) -> Result<Self> {
    if replicas == 0 {
      return Err(Error::ZeroReplicas);
    }
    Ok(Self {
      replicas,
      ticks: Ticks::default(),
      state: State::Unsorted,
    })
  }

  /// Create from a configuration list
  /// 从配置列表创建
  pub fn with_conf(conf: &[Conf]) -> Result<Self> {
    Self::new(ParsedConf::new(conf).replicas)
  }

  /// Virtual node count for `multiplier`
  /// `multiplier` 对应的虚拟节点数
  fn vnodes(&self, multiplier: u32) -> Result<u32> {
    if multiplier == 0 {
      return Err(Error::ZeroMultiplier);
    }
    self
      .replicas
      .checked_mul(multiplier)
      .ok_or(Error::TooManyReplicas {
        replicas: self.replicas,
        multiplier,
      })
  }

  /// Add `replicas * multiplier` virtual nodes for `name`
  /// 为 `name` 添加 `replicas * multiplier` 个虚拟节点
  ///
  /// The ring is unsorted afterwards, call [`Ring::finalize`] before lookups.
  /// 之后环处于未排序状态，查找前需调用 [`Ring::finalize`]。
  pub fn add_node(&mut self, name: &str, multiplier: u32) -> Result<()> {
    let n = self.vnodes(multiplier)?;
    let node = HipStr::from(name);
    let mut buf = String::with_capacity(name.len() + 11);

    self.ticks.reserve(n as usize);
    for i in 1..=n {
      self.ticks.push(Tick {
        pos: vnode_pos_buf(&mut buf, name, i),
        node: node.clone(),
      });
    }
    self.state = State::Unsorted;
    debug!("ring add {name} x{n}, {} ticks", self.ticks.len());
    Ok(())
  }

  /// Remove the virtual nodes that `add_node(name, multiplier)` created
  /// 删除 `add_node(name, multiplier)` 创建的虚拟节点
  ///
  /// Every position must match a tick owned by `name`, otherwise nothing is
  /// removed. The ring stays finalized.
  /// 每个位置都必须匹配 `name` 拥有的虚拟节点，否则不删除任何内容。环保持有序。
  pub fn rm_node(&mut self, name: &str, multiplier: u32) -> Result<()> {
    let n = self.vnodes(multiplier)?;
    if self.state != State::Finalized {
      return Err(Error::Unfinalized);
    }

    let mut hit = vec![false; self.ticks.len()];
    let mut buf = String::with_capacity(name.len() + 11);
    for i in 1..=n {
      let pos = vnode_pos_buf(&mut buf, name, i);
      match self.ticks.find(pos, name, &hit) {
        Some(idx) => hit[idx] = true,
        None => {
          return Err(Error::NodeNotFound {
            node: HipStr::from(name),
            pos,
          });
        }
      }
    }

    self.ticks.drain_hit(&hit);
    debug!("ring rm {name} x{n}, {} ticks", self.ticks.len());
    Ok(())
  }

  /// Sort ticks by position, idempotent
  /// 按位置排序，幂等
  pub fn finalize(&mut self) {
    self.ticks.sort();
    self.state = State::Finalized;
  }

  /// Owner of `key`
  /// `key` 的归属节点
  #[inline]
  pub fn lookup(&self, key: impl AsRef<[u8]>) -> Result<&str> {
    self.lookup_pos(hash::pos(key.as_ref()))
  }

  /// Owner of a ring position: first tick at or after `pos`, wrapping to the
  /// smallest position
  /// 环位置的归属节点：第一个不小于 `pos` 的虚拟节点，越过末尾则回绕到最小位置
  pub fn lookup_pos(&self, pos: u32) -> Result<&str> {
    if self.ticks.is_empty() {
      return Err(Error::Empty);
    }
    if self.state != State::Finalized {
      return Err(Error::Unfinalized);
    }
    let mut idx = self.ticks.first_ge(pos);
    if idx == self.ticks.len() {
      idx = 0;
    }
    Ok(self.ticks[idx].node.as_str())
  }

  #[inline]
  pub fn replicas(&self) -> u32 {
    self.replicas
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.ticks.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.ticks.is_empty()
  }

  #[inline]
  pub fn is_finalized(&self) -> bool {
    self.state == State::Finalized
  }

  /// All ticks, sorted only when finalized
  /// 所有虚拟节点，仅在 finalize 后有序
  #[inline]
  pub fn ticks(&self) -> &[Tick] {
    &self.ticks
  }

  /// Distinct node names, sorted
  /// 去重后的节点名，已排序
  pub fn nodes(&self) -> Vec<&str> {
    let mut li: Vec<&str> = self.ticks.iter().map(|t| t.node.as_str()).collect();
    li.sort_unstable();
    li.dedup();
    li
  }

  /// Feed every `(pos, node)` to `sink`
  /// 将每个 `(pos, node)` 交给 `sink`
  pub fn dump(&self, mut sink: impl FnMut(u32, &str)) {
    for t in self.ticks.iter() {
      sink(t.pos, t.node.as_str());
    }
  }

  /// Dump every tick at debug level
  /// 以 debug 级别输出所有虚拟节点
  pub fn log_dump(&self) {
    self.dump(|pos, node| debug!("{pos} {node}"));
  }
}
