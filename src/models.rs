//! Public tank models.
//!
//! # Organization
//!
//! Models are grouped into domain-specific submodules. Currently only
//! [`storage`] exists, holding liquid-storage geometry.
//!
//! # Model structure
//!
//! Each model lives in its own module with an internal `core` submodule where
//! the geometry and bookkeeping live. Anything needed by callers is
//! re-exported from the model module itself.
//!
//! Where a model is useful inside an iterative solve, it also provides a thin
//! [`twine_core::Model`] adapter that delegates to the core API.

pub mod storage;
