use crate::domain::model::{MixOutcome, OutputFormat};
use crate::utils::error::Result;

pub fn render(outcome: &MixOutcome, format: OutputFormat, precision: u32) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(outcome, precision)),
        OutputFormat::Json => render_json(outcome, precision),
    }
}

pub fn render_text(outcome: &MixOutcome, precision: u32) -> String {
    let result = outcome.result.rounded(precision);
    let p = precision as usize;

    format!(
        "New color info:\n\
         RED: {}\n\
         GREEN: {}\n\
         BLUE: {}\n\
         ALPHA: {}\n\
         HEX: {}\n\
         HUE: {:.p$}\n\
         SATURATION: {:.p$}\n\
         LIGHTNESS: {:.p$}\n",
        result.red,
        result.green,
        result.blue,
        result.alpha,
        result.hex,
        result.hue,
        result.saturation,
        result.lightness,
    )
}

pub fn render_json(outcome: &MixOutcome, precision: u32) -> Result<String> {
    let rounded = MixOutcome {
        result: outcome.result.rounded(precision),
        ..outcome.clone()
    };
    Ok(serde_json::to_string_pretty(&rounded)?)
}
