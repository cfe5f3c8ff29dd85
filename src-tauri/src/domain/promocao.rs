//! Promocao Entity
//!
//! A priced offer tied to a location. Identity is assigned by the server.

use serde::{Deserialize, Deserializer, Serialize};

use super::entity::{DomainResult, Entity, FieldErrors};
use super::feedback::{MSG_LOCALIZACAO_REQUIRED, MSG_PRODUTO_REQUIRED, MSG_VALOR_CHEIO_REQUIRED};

/// A promotion record as held in local state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promocao {
    /// Server-assigned identifier
    #[serde(deserialize_with = "de_id")]
    pub id: u32,
    /// Free-text label; promotions sharing a label belong to the same store
    #[serde(default)]
    pub promocao: String,
    #[serde(default, deserialize_with = "de_price")]
    pub valor_cheio: f64,
    #[serde(default, deserialize_with = "de_optional_price")]
    pub valor_promocional: Option<f64>,
    #[serde(default)]
    pub localizacao: String,
}

impl Entity for Promocao {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// New-promotion form as typed by the user. Sent to the server verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromocaoDraft {
    pub promocao: String,
    pub valor_cheio: String,
    #[serde(default)]
    pub valor_promocional: String,
    pub localizacao: String,
}

impl PromocaoDraft {
    pub const FIELD_PROMOCAO: &'static str = "promocao";
    pub const FIELD_VALOR_CHEIO: &'static str = "valorCheio";
    pub const FIELD_LOCALIZACAO: &'static str = "localizacao";

    /// Presence check on the required fields
    pub fn validate(&self) -> DomainResult<()> {
        let mut errors = FieldErrors::new();
        if self.promocao.trim().is_empty() {
            errors.add(Self::FIELD_PROMOCAO, MSG_PRODUTO_REQUIRED);
        }
        if self.valor_cheio.trim().is_empty() {
            errors.add(Self::FIELD_VALOR_CHEIO, MSG_VALOR_CHEIO_REQUIRED);
        }
        if self.localizacao.trim().is_empty() {
            errors.add(Self::FIELD_LOCALIZACAO, MSG_LOCALIZACAO_REQUIRED);
        }
        errors.into_result()
    }

    /// Copy the draft's fields onto an existing record.
    ///
    /// Prices that do not parse leave the previous value in place; the
    /// names of those fields are returned.
    pub fn merge_into(&self, record: &mut Promocao) -> Vec<&'static str> {
        let mut skipped = Vec::new();
        record.promocao = self.promocao.clone();
        record.localizacao = self.localizacao.clone();

        match parse_decimal(&self.valor_cheio) {
            Some(v) => record.valor_cheio = v,
            None => skipped.push(Self::FIELD_VALOR_CHEIO),
        }

        if self.valor_promocional.trim().is_empty() {
            record.valor_promocional = None;
        } else {
            match parse_decimal(&self.valor_promocional) {
                Some(v) => record.valor_promocional = Some(v),
                None => skipped.push("valorPromocional"),
            }
        }
        skipped
    }
}

/// Parse a price typed with either `.` or `,` as decimal separator.
///
/// When both appear, the rightmost one is the decimal separator and the
/// other is dropped as a thousands separator (`1.234,56` and `1,234.56`
/// both give `1234.56`).
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim().trim_start_matches("R$").trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = match trimmed.chars().rev().find(|c| *c == ',' || *c == '.') {
        Some(',') => trimmed.replace('.', "").replace(',', "."),
        Some(_) => trimmed.replace(',', ""),
        None => trimmed.to_string(),
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Number(u64),
    Text(String),
}

fn de_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    use serde::de::Error;
    match IdRepr::deserialize(deserializer)? {
        IdRepr::Number(n) => u32::try_from(n).map_err(|_| D::Error::custom(format!("id out of range: {}", n))),
        IdRepr::Text(s) => s
            .trim()
            .parse::<u32>()
            .map_err(|_| D::Error::custom(format!("invalid id: {:?}", s))),
    }
}

fn de_optional_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(s)) => parse_decimal(&s),
        None => None,
    })
}

fn de_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(de_optional_price(deserializer)?.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    fn combo_draft() -> PromocaoDraft {
        PromocaoDraft {
            promocao: "Combo X".into(),
            valor_cheio: "20".into(),
            valor_promocional: String::new(),
            localizacao: "Store A".into(),
        }
    }

    #[test]
    fn test_draft_wire_names() {
        let json = serde_json::to_value(combo_draft()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "promocao": "Combo X",
                "valorCheio": "20",
                "valorPromocional": "",
                "localizacao": "Store A"
            })
        );
    }

    #[test]
    fn test_validate_reports_each_missing_field() {
        let draft = PromocaoDraft {
            valor_promocional: "10".into(),
            ..Default::default()
        };
        let Err(DomainError::Validation(errors)) = draft.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("promocao"), Some(MSG_PRODUTO_REQUIRED));
        assert_eq!(errors.get("valorCheio"), Some(MSG_VALOR_CHEIO_REQUIRED));
        assert_eq!(errors.get("localizacao"), Some(MSG_LOCALIZACAO_REQUIRED));
    }

    #[test]
    fn test_promotional_price_is_optional() {
        assert!(combo_draft().validate().is_ok());
    }

    #[test]
    fn test_lenient_record_decoding() {
        let record: Promocao = serde_json::from_str(
            r#"{"id":"7","promocao":"Combo X","valorCheio":"20","valorPromocional":"","localizacao":"Store A"}"#,
        )
        .unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.valor_cheio, 20.0);
        assert_eq!(record.valor_promocional, None);

        let record: Promocao = serde_json::from_str(
            r#"{"id":3,"promocao":"Pizza","valorCheio":45.5,"valorPromocional":39.9,"localizacao":"Centro"}"#,
        )
        .unwrap();
        assert_eq!(record.valor_promocional, Some(39.9));

        let record: Promocao =
            serde_json::from_str(r#"{"id":4,"promocao":"Suco","valorCheio":null,"localizacao":"Praia"}"#).unwrap();
        assert_eq!(record.valor_cheio, 0.0);
        assert_eq!(record.valor_promocional, None);
    }

    #[test]
    fn test_invalid_id_is_rejected() {
        let result: Result<Promocao, _> = serde_json::from_str(r#"{"id":"abc","promocao":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_decimal_formats() {
        assert_eq!(parse_decimal("19,90"), Some(19.9));
        assert_eq!(parse_decimal("1.234,56"), Some(1234.56));
        assert_eq!(parse_decimal("1,234.56"), Some(1234.56));
        assert_eq!(parse_decimal("1.234.567,8"), Some(1234567.8));
        assert_eq!(parse_decimal("1,234,567.89"), Some(1234567.89));
        assert_eq!(parse_decimal("2.50"), Some(2.5));
        assert_eq!(parse_decimal(" 20 "), Some(20.0));
        assert_eq!(parse_decimal("R$ 12,5"), Some(12.5));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
    }

    #[test]
    fn test_merge_keeps_unparsable_price() {
        let mut record = Promocao {
            id: 1,
            promocao: "Old".into(),
            valor_cheio: 30.0,
            valor_promocional: Some(25.0),
            localizacao: "A".into(),
        };
        let draft = PromocaoDraft {
            promocao: "New".into(),
            valor_cheio: "trinta".into(),
            valor_promocional: String::new(),
            localizacao: "B".into(),
        };
        let skipped = draft.merge_into(&mut record);
        assert_eq!(skipped, vec!["valorCheio"]);
        assert_eq!(record.promocao, "New");
        assert_eq!(record.localizacao, "B");
        assert_eq!(record.valor_cheio, 30.0);
        assert_eq!(record.valor_promocional, None);
        assert_eq!(record.id, 1);
    }
}
