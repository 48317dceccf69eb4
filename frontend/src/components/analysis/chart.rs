//! Geometry for the CSS-drawn charts.

use common::views::ReasonCount;

/// Series palette, cycled when there are more bars or slices than colours.
pub const COLORS: [&str; 8] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#06b6d4", "#f97316",
];

pub fn color(index: usize) -> &'static str {
    COLORS[index % COLORS.len()]
}

/// Bar length as a percentage of the largest value. A zero maximum draws
/// nothing.
pub fn bar_percent(value: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    f64::from(value) / f64::from(max) * 100.0
}

/// `conic-gradient` background for the reason donut, one slice per reason.
pub fn donut_gradient(reasons: &[ReasonCount]) -> String {
    let total: usize = reasons.iter().map(|r| r.count).sum();
    if total == 0 {
        return "conic-gradient(#e2e8f0 0% 100%)".to_string();
    }

    let mut start = 0.0;
    let mut stops = Vec::with_capacity(reasons.len());
    for (index, reason) in reasons.iter().enumerate() {
        let end = start + reason.count as f64 / total as f64 * 100.0;
        stops.push(format!("{} {:.2}% {:.2}%", color(index), start, end));
        start = end;
    }
    format!("conic-gradient({})", stops.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(name: &str, count: usize) -> ReasonCount {
        ReasonCount {
            reason: name.to_string(),
            count,
        }
    }

    #[test]
    fn bars_scale_against_the_maximum() {
        assert_eq!(bar_percent(5, 10), 50.0);
        assert_eq!(bar_percent(10, 10), 100.0);
        assert_eq!(bar_percent(3, 0), 0.0);
    }

    #[test]
    fn palette_wraps_around() {
        assert_eq!(color(0), "#3b82f6");
        assert_eq!(color(8), "#3b82f6");
        assert_eq!(color(11), "#ef4444");
    }

    #[test]
    fn donut_slices_cover_the_whole_circle() {
        let gradient = donut_gradient(&[reason("CUTI SAKIT", 1), reason("KURSUS", 3)]);
        assert_eq!(
            gradient,
            "conic-gradient(#3b82f6 0.00% 25.00%, #10b981 25.00% 100.00%)"
        );
    }

    #[test]
    fn empty_donut_is_a_grey_ring() {
        assert_eq!(donut_gradient(&[]), "conic-gradient(#e2e8f0 0% 100%)");
    }
}
