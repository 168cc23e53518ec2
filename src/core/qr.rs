//! QR codes for issued passes.
//!
//! The code encodes a one-line summary of the pass and is shipped as a
//! base64-encoded SVG document in the `qr_code` field of JSON output.

use crate::domain::model::PassSummary;
use crate::utils::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use qrcode::render::svg;
use qrcode::QrCode;
use serde::Serialize;

const QR_MIN_SIZE: u32 = 200;

/// `Name: .., Date of Birth: .., Age: .., Eligibility: ..`
pub fn qr_payload(summary: &PassSummary) -> String {
    format!(
        "Name: {}, Date of Birth: {}, Age: {}, Eligibility: {}",
        summary.name, summary.dob, summary.age, summary.eligibility
    )
}

pub fn render_qr_svg(payload: &str) -> Result<String> {
    let code = QrCode::new(payload.as_bytes())?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(QR_MIN_SIZE, QR_MIN_SIZE)
        .build())
}

pub fn encode_qr(summary: &PassSummary) -> Result<String> {
    let svg = render_qr_svg(&qr_payload(summary))?;
    Ok(STANDARD.encode(svg))
}

/// A pass summary plus its QR code, as written to JSON.
#[derive(Debug, Serialize)]
pub struct IssuedPass<'a> {
    #[serde(flatten)]
    pub summary: &'a PassSummary,
    pub qr_code: String,
}

impl<'a> IssuedPass<'a> {
    pub fn new(summary: &'a PassSummary) -> Result<Self> {
        Ok(Self {
            summary,
            qr_code: encode_qr(summary)?,
        })
    }
}
