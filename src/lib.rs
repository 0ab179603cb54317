//! Workspace tooling package (pre-commit hooks); no code.
