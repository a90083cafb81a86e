#![cfg_attr(docsrs, feature(doc_cfg))]

//! # ketama - Consistent hash ring / 一致性哈希环
//!
//! Maps keys to named nodes through SHA-1 placed virtual nodes.
//! Adding or removing a node only remaps the keys on its own arcs.
//! 通过 SHA-1 定位的虚拟节点将键映射到命名节点。
//! 增删节点只会重新映射其所在弧段上的键。
//!
//! ```
//! use ketama::Ring;
//!
//! let mut ring = Ring::new(160)?;
//! ring.add_node("10.0.0.1:11211", 1)?;
//! ring.add_node("10.0.0.2:11211", 2)?;
//! ring.finalize();
//!
//! let node = ring.lookup("user:42")?;
//! assert!(node.starts_with("10.0.0."));
//! # Ok::<(), ketama::Error>(())
//! ```

pub mod conf;
pub mod error;
pub mod hash;
mod ring;
mod ticks;

pub use conf::{Conf, ParsedConf};
pub use error::{Error, Result};
pub use ring::Ring;
pub use ticks::Tick;
