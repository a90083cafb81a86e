//! Ring configuration
//! 哈希环配置

/// Default configuration values
/// 默认配置值
pub mod default {
  /// Points per server, the customary ketama value
  /// 每台服务器的点数，ketama 惯用值
  pub const REPLICAS: u32 = 160;
}

/// Ring configuration
/// 哈希环配置
#[derive(Debug, Clone, Copy)]
pub enum Conf {
  /// Base virtual nodes per physical node (multiplier 1)
  /// 每个物理节点的基础虚拟节点数（倍数为 1）
  Replicas(u32),
}

/// Parsed configuration
/// 解析后的配置
#[derive(Debug, Clone, Copy)]
pub struct ParsedConf {
  pub replicas: u32,
}

impl Default for ParsedConf {
  fn default() -> Self {
    Self {
      replicas: default::REPLICAS,
    }
  }
}

impl ParsedConf {
  pub fn new(conf: &[Conf]) -> Self {
    let mut c = Self::default();
    for item in conf {
      match *item {
        Conf::Replicas(v) => c.replicas = v,
      }
    }
    c
  }
}
