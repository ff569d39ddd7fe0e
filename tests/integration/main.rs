//! Integration tests: signed token → validated claims → authorization decision.

mod helpers;

mod catalog_test;
mod permission_test;
mod token_test;
