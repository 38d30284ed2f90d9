//! Advisory recommendations for a growth assessment
//!
//! The messages are the Indonesian advisory texts shown to health workers
//! and parents. Ordering is stable for display; the list is never empty.

use crate::models::assessment::GrowthAssessment;
use crate::models::types::StuntingStatus;

/// Build the ordered advisory list for an assessment
///
/// Stunted children get the referral set, at-risk children a softer
/// improvement set; age-bracket feeding guidance follows (exclusive
/// breastfeeding under 6 months, complementary feeding up to 24 months).
/// Normal older children get a default maintenance pair.
#[must_use]
pub fn recommendations(assessment: &GrowthAssessment, age_months: u32) -> Vec<&'static str> {
    let mut messages = Vec::new();

    if assessment.is_stunted {
        messages.push("Segera rujuk ke fasilitas kesehatan untuk pemeriksaan lebih lanjut");
        messages.push("Berikan makanan bergizi tinggi dengan protein hewani");
        messages.push("Pastikan pemberian ASI eksklusif (jika usia < 6 bulan)");
        messages.push("Monitoring pertumbuhan setiap bulan");
    } else if assessment.stunting_status == StuntingStatus::AtRisk {
        messages.push("Tingkatkan asupan gizi dengan makanan beragam");
        messages.push("Berikan makanan tambahan yang kaya protein");
        messages.push("Lakukan pemantauan pertumbuhan rutin");
    }

    if age_months < 6 {
        messages.push("Pastikan pemberian ASI eksklusif");
    } else if age_months < 24 {
        messages.push("Berikan MPASI yang beragam dan bergizi");
        messages.push("Lanjutkan pemberian ASI hingga 2 tahun");
    }

    if messages.is_empty() {
        messages.push("Pertahankan pola makan sehat dan bergizi seimbang");
        messages.push("Lakukan pemantauan pertumbuhan rutin setiap bulan");
    }

    messages
}
