/// Absence reasons offered by the entry form, in display order.
///
/// The store keeps whatever string it is given; this list only drives the UI.
pub const REASONS: &[&str] = &[
    "CUTI REHAT",
    "CUTI REHAT KHAS",
    "CUTI SAKIT",
    "TEMUJANJI DOKTOR",
    "URUSAN PPD/JPN/KPM",
    "MESYUARAT",
    "CUTI KUARANTIN",
    "CUTI TANPA REKOD",
    "CUTI BERSALIN",
    "TAKLIMAT/BENGKEL",
    "GURU PENGIRING",
    "PETUGAS PEPERIKSAAN",
    "LAIN-LAIN",
];

/// Largest day count selectable in the entry form.
pub const MAX_FORM_DAYS: u32 = 30;
