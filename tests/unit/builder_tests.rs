// Builder unit tests: option methods and their segments

use imgproxy_url::{
    gravity, Format, Gravity, GravityArgs, GravityKind, Proxy, ProxyConfig, ResizeType, TrimArgs,
};

fn unsafe_proxy() -> Proxy {
    Proxy::new(ProxyConfig::new("http://localhost:8080"))
}

#[test]
fn test_width_and_height_segments() {
    let proxy = unsafe_proxy();
    let builder = proxy.builder().width(300).height(200);
    assert_eq!(builder.segments(), ["w:300", "h:200"]);
}

#[test]
fn test_min_sizes_and_max_bytes() {
    let proxy = unsafe_proxy();
    let builder = proxy
        .builder()
        .min_width(10)
        .min_height(20)
        .max_bytes(65536)
        .pixelate(8);
    assert_eq!(builder.segments(), ["mw:10", "mh:20", "mb:65536", "pix:8"]);
}

#[test]
fn test_float_options_use_clean_formatting() {
    let proxy = unsafe_proxy();
    let builder = proxy
        .builder()
        .dpr(2.0)
        .blur(1.5)
        .sharpen(0.25)
        .quality(85.0);
    assert_eq!(builder.segments(), ["dpr:2", "bl:1.5", "sh:0.25", "q:85"]);
}

#[test]
fn test_quality_boundaries() {
    let proxy = unsafe_proxy();
    assert!(proxy.builder().quality(0.0).segments().is_empty());
    assert!(proxy.builder().quality(101.0).segments().is_empty());
    assert_eq!(proxy.builder().quality(100.0).segments(), ["q:100"]);
    assert_eq!(proxy.builder().quality(0.5).segments(), ["q:0.5"]);
}

#[test]
fn test_rotate_normalization() {
    let proxy = unsafe_proxy();
    for r in [0, 45, 91, 360, 720] {
        assert!(
            proxy.builder().rotate(r).segments().is_empty(),
            "rotate({}) should not emit a segment",
            r
        );
    }
    assert_eq!(proxy.builder().rotate(90).segments(), ["rot:90"]);
    assert_eq!(proxy.builder().rotate(450).segments(), ["rot:90"]);
    assert_eq!(proxy.builder().rotate(540).segments(), ["rot:180"]);
}

#[test]
fn test_string_options() {
    let proxy = unsafe_proxy();
    let builder = proxy
        .builder()
        .filename("cover")
        .cachebuster("2024-01")
        .preset("thumb");
    assert_eq!(builder.segments(), ["fn:cover", "cb:2024-01", "pr:thumb"]);
}

#[test]
fn test_resizing_types() {
    let proxy = unsafe_proxy();
    let builder = proxy
        .builder()
        .resizing_type(ResizeType::Fit)
        .resizing_type(ResizeType::FillDown)
        .resizing_type(ResizeType::Force)
        .resizing_type(ResizeType::Auto);
    assert_eq!(builder.segments(), ["rt:fit", "rt:fill-down", "rt:force", "rt:auto"]);
}

#[test]
fn test_gravity_variants() {
    let proxy = unsafe_proxy();
    let builder = proxy
        .builder()
        .gravity(Gravity::new(GravityKind::Smart))
        .gravity(gravity(GravityKind::SouthEast, GravityArgs::Offset(5, 7)))
        .gravity(gravity(GravityKind::FocusPoint, GravityArgs::Focus(0.3, 0.7)))
        .gravity(gravity(GravityKind::FocusPoint, GravityArgs::Focus(2.0, 0.7)));
    assert_eq!(
        builder.segments(),
        ["g:sm", "g:soea:5:7", "g:fp:0.3:0.7", "g:fp"]
    );
}

#[test]
fn test_crop_with_and_without_gravity() {
    let proxy = unsafe_proxy();
    let builder = proxy
        .builder()
        .crop(200.0, 100.0, None)
        .crop(200.0, 100.0, Some(Gravity::focus(0.5, 0.5)))
        .crop(-1.0, 100.0, None);
    assert_eq!(builder.segments(), ["c:200:100", "c:200:100:fp:0.5:0.5"]);
}

#[test]
fn test_padding_arity() {
    let proxy = unsafe_proxy();
    assert!(proxy.builder().padding(&[]).segments().is_empty());
    assert!(proxy
        .builder()
        .padding(&[5, 10, 15, 20, 25])
        .segments()
        .is_empty());
    assert_eq!(proxy.builder().padding(&[5]).segments(), ["pd:5"]);
    assert_eq!(
        proxy.builder().padding(&[5, 10, 15, 20]).segments(),
        ["pd:5:10:15:20"]
    );
}

#[test]
fn test_zoom_forms() {
    let proxy = unsafe_proxy();
    assert_eq!(proxy.builder().zoom(&[2.0]).segments(), ["z:2"]);
    assert_eq!(proxy.builder().zoom(&[1.5, 0.5]).segments(), ["z:1.5:0.5"]);
    assert!(proxy.builder().zoom(&[1.0, 1.0, 1.0]).segments().is_empty());
}

#[test]
fn test_background_boundaries() {
    let proxy = unsafe_proxy();
    assert_eq!(proxy.builder().background_hex("fafafa").segments(), ["bg:fafafa"]);
    assert_eq!(proxy.builder().background_rgb(0, 0, 255).segments(), ["bg:0:0:255"]);
    assert!(proxy.builder().background_rgb(0, 0, 256).segments().is_empty());
    assert!(proxy.builder().background_rgb(-1, 0, 0).segments().is_empty());
}

#[test]
fn test_trim_positional_rules() {
    let proxy = unsafe_proxy();
    assert_eq!(
        proxy
            .builder()
            .trim(10.0, TrimArgs::ColorHorVer("aabbcc", true, false))
            .segments(),
        ["t:10:aabbcc:1"]
    );
    assert_eq!(
        proxy.builder().trim(10.0, TrimArgs::Color("zzzz")).segments(),
        ["t:10"]
    );
    assert_eq!(
        proxy
            .builder()
            .trim(5.5, TrimArgs::ColorHor("aabbcc", true))
            .segments(),
        ["t:5.5:aabbcc:1"]
    );
}

#[test]
fn test_extend_segment() {
    let proxy = unsafe_proxy();
    let builder = proxy
        .builder()
        .extend(true, None)
        .extend(true, Some(Gravity::new(GravityKind::East)));
    assert_eq!(builder.segments(), ["ex:1", "ex:1:ea"]);
}

#[test]
fn test_format_is_last_wins() {
    let proxy = unsafe_proxy();
    let url = proxy
        .builder()
        .format(Format::Gif)
        .width(10)
        .format(Format::Tiff)
        .generate("src")
        .unwrap();
    assert_eq!(url, "http://localhost:8080/unsafe/w:10/src.tiff");
}

#[test]
fn test_every_segment_is_slash_free() {
    let proxy = unsafe_proxy();
    let builder = proxy
        .builder()
        .width(1)
        .gravity(Gravity::focus(0.1, 0.2))
        .background_hex("ff/00")
        .preset("a/b")
        .trim(1.0, TrimArgs::ColorHorVer("000000", true, true));
    for segment in builder.segments() {
        assert!(!segment.contains('/'), "segment {} contains '/'", segment);
        let (token, _) = segment.split_once(':').unwrap();
        assert!(token.chars().all(|c| c.is_ascii_lowercase()));
    }
    assert_eq!(builder.segments().len(), 3);
}
