use hipstr::HipStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("ring is empty / 哈希环为空")]
  Empty,

  #[error("ring not finalized / 哈希环未排序")]
  Unfinalized,

  #[error("node {node} not found at {pos} / 节点不存在")]
  NodeNotFound { node: HipStr<'static>, pos: u32 },

  #[error("replicas must be positive / 副本数必须为正")]
  ZeroReplicas,

  #[error("multiplier must be positive / 倍数必须为正")]
  ZeroMultiplier,

  #[error("too many replicas: {replicas} x {multiplier} / 虚拟节点过多")]
  TooManyReplicas { replicas: u32, multiplier: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
