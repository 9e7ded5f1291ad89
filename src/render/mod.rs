//! Projections of a built module registry
//!
//! - `plantuml` - component-diagram text (declarations plus counted
//!   dependency arrows)
//! - `json` - machine-readable summary for piping to other tools
//!
//! Both are pure functions over [`Modules`](crate::modules::Modules); no
//! file output happens here.

pub mod json;
pub mod plantuml;
