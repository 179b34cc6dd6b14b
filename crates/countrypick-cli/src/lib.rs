//! countrypick-cli
//! ===============
//!
//! Command-line interface for the `countrypick-core` country organizer.
//!
//! This crate primarily provides a binary (`countrypick`). The library
//! target only exists so docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! countrypick sections --dial-codes
//! countrypick --preferred DE,CH search united
//! countrypick --history ~/.countrypick.json select fr
//! countrypick index Z
//! countrypick dial +41
//! ```
//!
//! For programmatic access use the `countrypick-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
