// Signer unit tests: encoding, path assembly and HMAC signatures

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use imgproxy_url::signer::{
    build_path, chunk_string, encode_source_url, sign_path, verify_signature,
};
use imgproxy_url::{ImgproxyError, ProxyConfig};
use sha2::Sha256;

fn reference_signature(key: &str, salt: &str, path: &str, size: usize) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(&hex::decode(key).unwrap()).unwrap();
    mac.update(&hex::decode(salt).unwrap());
    mac.update(path.as_bytes());
    let digest = mac.finalize().into_bytes();
    URL_SAFE_NO_PAD.encode(&digest[..size])
}

#[test]
fn test_encoded_source_round_trips() {
    let source = "https://example.com/images/some photo (1).jpg?size=large";
    let encoded = encode_source_url(source);
    for chunk in encoded.split('/') {
        assert!(chunk.len() <= 16);
        assert!(!chunk.contains('='));
    }
    let joined: String = encoded.split('/').collect();
    let decoded = URL_SAFE_NO_PAD.decode(joined).unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), source);
}

#[test]
fn test_chunk_count_matches_encoded_length() {
    let source = "https://m.media-amazon.com/images/M/MV5BMmQ3ZmY4NzYtY2VmYi00ZDRmLTgyODAt.jpg";
    let encoded_len = URL_SAFE_NO_PAD.encode(source).len();
    let chunks = chunk_string(&URL_SAFE_NO_PAD.encode(source), 16);
    assert_eq!(chunks.len(), (encoded_len + 15) / 16);
}

#[test]
fn test_signature_matches_reference_hmac() {
    let config = ProxyConfig::new("http://localhost:8080")
        .with_signing("736563726574", "68656C6C6F")
        .with_signature_size(8);
    let path = build_path(&["w:300".to_string()], "abc", "png");
    let sig = sign_path(&config, &path).unwrap();
    assert_eq!(sig.len(), 11);
    assert_eq!(sig, reference_signature("736563726574", "68656C6C6F", &path, 8));
}

#[test]
fn test_full_signature_length() {
    let config = ProxyConfig::new("http://x").with_signing("736563726574", "68656C6C6F");
    let sig = sign_path(&config, "/w:300/http://src/a.png.jpg").unwrap();
    assert_eq!(sig, "Pr9lC7RIM1Q1jzO7XHMcVgaQonJVMtDsrwQICUUZ9OI");
    assert_eq!(sig.len(), 43);
}

#[test]
fn test_verify_against_other_config_fails() {
    let signer = ProxyConfig::new("http://x").with_signing("736563726574", "68656C6C6F");
    let other = ProxyConfig::new("http://x").with_signing("736563726575", "68656C6C6F");
    let sig = sign_path(&signer, "/a.jpg").unwrap();
    assert!(matches!(
        verify_signature(&other, &sig, "/a.jpg"),
        Err(ImgproxyError::InvalidSignature)
    ));
}
