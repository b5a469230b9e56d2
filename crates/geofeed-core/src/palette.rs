//! Static category → marker colour table.
//!
//! Unknown categories have no colour; the map widget falls back to its own
//! default in that case.

use phf::phf_map;

static CATEGORY_COLORS: phf::Map<&'static str, &'static str> = phf_map! {
    "求助" => "#e54d42",
    "求救" => "#e54d42",
    "救援" => "#f37b1d",
    "物资" => "#fbbd08",
    "医疗" => "#39b54a",
    "安置" => "#1cbbb4",
    "避难" => "#1cbbb4",
    "交通" => "#0081ff",
    "信息" => "#6739b6",
    "其他" => "#8799a3",
    "未分类" => "#aaaaaa",
};

/// Colour for `category`, or `None` if the category is not in the table.
pub fn color_for(category: &str) -> Option<&'static str> {
    CATEGORY_COLORS.get(category).copied()
}

/// All categories that have a colour, in unspecified order.
pub fn known_categories() -> impl Iterator<Item = &'static str> {
    CATEGORY_COLORS.keys().copied()
}
