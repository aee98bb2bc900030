use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to write YAML config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        if content.trim().is_empty() {
            return Err("Config file is empty".to_string());
        }
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to parse YAML config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Difficulty, GameMode, Mark};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct MatchSettings {
        mode: GameMode,
        difficulty: Difficulty,
        human_mark: Mark,
    }

    #[test]
    fn test_enums_are_written_by_name() {
        let settings = MatchSettings {
            mode: GameMode::HumanVsAi,
            difficulty: Difficulty::Hard,
            human_mark: Mark::O,
        };
        let yaml = YamlConfigSerializer::new().serialize(&settings).unwrap();
        assert!(yaml.contains("mode: HumanVsAi"), "{}", yaml);
        assert!(yaml.contains("difficulty: Hard"), "{}", yaml);
        assert!(yaml.contains("human_mark: O"), "{}", yaml);
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let content = "mode: HumanVsAi\ndifficulty: Impossible\nhuman_mark: X\n";
        let result: Result<MatchSettings, String> = YamlConfigSerializer::new().deserialize(content);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_content_is_rejected() {
        let result: Result<MatchSettings, String> = YamlConfigSerializer::new().deserialize("  \n");
        assert_eq!(result, Err("Config file is empty".to_string()));
    }
}
