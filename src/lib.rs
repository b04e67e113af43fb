//! Workspace tooling package. Hosts the pre-commit hook configuration; the
//! calculator lives in `crates/wetfreight-lib` and `crates/wetfreight-cli`.
