//! # Sample Reports
//!
//! Ready-made line lists for trying a printer out. They double as examples
//! of composing documents from the layout helpers.

use crate::document::LineEntry;
use crate::glyph::FontSizeProfile;
use crate::layout::{Align, Cell, Column, Table, build_line, draw_separator, pad_text};

/// Width of the sample documents in half-width units.
const REPORT_WIDTH: usize = 87;

struct Item {
    name: &'static str,
    size: &'static str,
    quantity: u32,
    unit_price_cents: u64,
}

const ITEMS: &[Item] = &[
    Item {
        name: "六角螺栓 Hex bolt",
        size: "M8×40",
        quantity: 200,
        unit_price_cents: 35,
    },
    Item {
        name: "平垫圈 Washer",
        size: "Φ8 镀锌",
        quantity: 400,
        unit_price_cents: 5,
    },
    Item {
        name: "不锈钢合页 Stainless hinge",
        size: "4寸",
        quantity: 12,
        unit_price_cents: 1280,
    },
];

fn money(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// A delivery note: title, header fields, item table, total, signature.
pub fn delivery_note() -> Vec<LineEntry> {
    let mut lines = vec![
        LineEntry::sized(
            pad_text("发货单 DELIVERY NOTE", REPORT_WIDTH / 2, Align::Center),
            FontSizeProfile::LARGE,
        ),
        LineEntry::from(""),
        LineEntry::from(build_line(&[
            Cell::new("单号 No.: DN-2026-0042", 44, Align::Left),
            Cell::new("日期 Date: 2026-10-19", 43, Align::Right),
        ])),
        LineEntry::from(build_line(&[
            Cell::new("客户 Customer: 华东五金有限公司", 44, Align::Left),
            Cell::new("电话 Tel: 021-5555-0199", 43, Align::Right),
        ])),
    ];

    let mut table = Table::new(vec![
        Column::new("序号", 6, Align::Right),
        Column::new("品名 Item", 30, Align::Left),
        Column::new("规格", 12, Align::Left),
        Column::new("数量", 8, Align::Right),
        Column::new("单价", 10, Align::Right),
        Column::new("金额", 14, Align::Right),
    ]);
    let mut total = 0;
    for (i, item) in ITEMS.iter().enumerate() {
        let amount = item.unit_price_cents * u64::from(item.quantity);
        total += amount;
        table = table.row([
            (i + 1).to_string(),
            item.name.to_string(),
            item.size.to_string(),
            item.quantity.to_string(),
            money(item.unit_price_cents),
            money(amount),
        ]);
    }
    lines.extend(table.lines().into_iter().map(LineEntry::from));

    lines.push(LineEntry::from(build_line(&[
        Cell::new("合计 Total (CNY)", 70, Align::Right),
        Cell::new(&money(total), 17, Align::Right),
    ])));
    lines.push(LineEntry::from(draw_separator(REPORT_WIDTH, '=')));
    lines.push(LineEntry::from(""));
    lines.push(LineEntry::sized(
        build_line(&[
            Cell::new("发货人 Shipped by: ________", 44, Align::Left),
            Cell::new("签收 Received by: ________", 43, Align::Right),
        ]),
        FontSizeProfile::SMALL,
    ));
    lines
}

/// Every profile printing ASCII, CJK and punctuation side by side.
pub fn font_test() -> Vec<LineEntry> {
    let samples = [
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ 0123456789",
        "abcdefghijklmnopqrstuvwxyz !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
        "中文字形测试 漢字 繁體 日本語かな カタカナ 한글",
        "全角：ＡＢＣ１２３，。！？【】《》￥",
    ];
    let mut lines = Vec::new();
    for (name, profile) in [
        ("SMALL", FontSizeProfile::SMALL),
        ("NORMAL", FontSizeProfile::NORMAL),
        ("LARGE", FontSizeProfile::LARGE),
    ] {
        lines.push(LineEntry::sized(
            format!("{} {}x{}", name, profile.ascii_width, profile.char_height),
            profile,
        ));
        lines.extend(samples.iter().map(|s| LineEntry::sized(*s, profile)));
        lines.push(LineEntry::from(draw_separator(REPORT_WIDTH, '-')));
    }
    lines
}

/// List available sample reports
pub fn list_reports() -> &'static [&'static str] {
    &["delivery-note", "font-test"]
}

/// Get a sample report by name
pub fn by_name(name: &str) -> Option<Vec<LineEntry>> {
    match name {
        "delivery-note" => Some(delivery_note()),
        "font-test" => Some(font_test()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::text_width;

    #[test]
    fn test_every_listed_report_exists() {
        for name in list_reports() {
            assert!(by_name(name).is_some_and(|lines| !lines.is_empty()), "{}", name);
        }
        assert!(by_name("nope").is_none());
    }

    #[test]
    fn test_delivery_note_lines_are_aligned() {
        let lines = delivery_note();
        let normal: Vec<&LineEntry> = lines
            .iter()
            .filter(|l| l.profile() == FontSizeProfile::NORMAL && !l.is_blank())
            .collect();
        assert!(normal.iter().all(|l| text_width(l.text()) == REPORT_WIDTH));
    }

    #[test]
    fn test_delivery_note_total() {
        let lines = delivery_note();
        // 200×0.35 + 400×0.05 + 12×12.80 = 70 + 20 + 153.60
        assert!(lines.iter().any(|l| l.text().ends_with("243.60")));
    }

    #[test]
    fn test_font_test_covers_profiles() {
        let lines = font_test();
        for profile in [
            FontSizeProfile::SMALL,
            FontSizeProfile::NORMAL,
            FontSizeProfile::LARGE,
        ] {
            assert!(lines.iter().any(|l| l.profile() == profile));
        }
    }
}
