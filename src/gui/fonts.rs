// src/gui/fonts.rs
//
// egui's bundled fonts have no Hangul glyphs, and the menu data is all
// Korean. Pull in the first system font with CJK coverage we can find
// and register it as a fallback for both families.

use eframe::egui;

const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "C:\\Windows\\Fonts\\malgun.ttf",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
];

pub fn install(ctx: &egui::Context) {
    let Some((path, bytes)) = FONT_PATHS
        .iter()
        .find_map(|p| std::fs::read(p).ok().map(|b| (*p, b)))
    else {
        loge!("Fonts: no Hangul-capable system font found; menu text may render as boxes");
        return;
    };
    logf!("Fonts: using {path}");

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(s!("hangul"), egui::FontData::from_owned(bytes).into());
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push(s!("hangul"));
    }
    ctx.set_fonts(fonts);
}
