// Remote endpoints. Data Dragon paths take the patch version as a path segment.

pub const DATA_DRAGON_BASE: &str = "https://ddragon.leagueoflegends.com";
pub const OPENAI_CHAT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

pub fn versions_url() -> String {
    format!("{}/api/versions.json", DATA_DRAGON_BASE)
}

pub fn champion_list_url(version: &str) -> String {
    format!("{}/cdn/{}/data/en_US/champion.json", DATA_DRAGON_BASE, version)
}

pub fn champion_icon_url(version: &str, image_full: &str) -> String {
    format!("{}/cdn/{}/img/champion/{}", DATA_DRAGON_BASE, version, image_full)
}
