use gloo_utils::document;
use shared::constants::PRIZE_CONFIG_ELEMENT_ID;
use shared::prize_config::PrizeConfig;
use shared::WheelError;

/// Reads the prize list the host page embeds as
/// `<script type="application/json" id="prize-config">`. Pages without one get
/// the built-in wheel; a present but broken document is a startup error.
pub fn load_prize_config() -> Result<PrizeConfig, WheelError> {
    match document().get_element_by_id(PRIZE_CONFIG_ELEMENT_ID) {
        Some(element) => {
            let json = element.text_content().unwrap_or_default();
            let config = PrizeConfig::from_json(&json)?;
            log::info!("Loaded {} prizes from #{}", config.len(), PRIZE_CONFIG_ELEMENT_ID);
            Ok(config)
        }
        None => {
            log::debug!("No #{} element, using the built-in prize list", PRIZE_CONFIG_ELEMENT_ID);
            Ok(PrizeConfig::default())
        }
    }
}
