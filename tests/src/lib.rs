//! Integration tests for the cosmos endpoint crawler workspace live in the
//! `tests` directory of this package.
