// Host-side tests for in-page anchor resolution.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod anchor {
    include!("../src/anchor.rs");
}

use anchor::fragment_selector;

#[test]
fn fragment_href_is_its_own_selector() {
    assert_eq!(fragment_selector("#features"), Some("#features"));
    assert_eq!(fragment_selector("#a"), Some("#a"));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(fragment_selector("  #pricing "), Some("#pricing"));
}

#[test]
fn bare_hash_has_no_target() {
    assert_eq!(fragment_selector("#"), None);
    assert_eq!(fragment_selector(" # "), None);
}

#[test]
fn non_fragment_links_have_no_target() {
    assert_eq!(fragment_selector(""), None);
    assert_eq!(fragment_selector("/docs#install"), None);
    assert_eq!(fragment_selector("https://example.com/#top"), None);
}
