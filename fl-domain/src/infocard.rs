use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct InfocardPhrase {
    pub phrase: String,
    #[serde(default)]
    pub bold: bool,
}

impl InfocardPhrase {
    pub fn bold(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            bold: true,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct InfocardLine {
    pub phrases: Vec<InfocardPhrase>,
}

impl InfocardLine {
    pub fn simple(text: impl Into<String>) -> Self {
        Self {
            phrases: vec![InfocardPhrase {
                phrase: text.into(),
                bold: false,
            }],
        }
    }

    pub fn to_plain_string(&self) -> String {
        self.phrases.iter().map(|p| p.phrase.as_str()).join("")
    }
}

pub type Infocard = Vec<InfocardLine>;

#[derive(Debug, Clone, Default)]
pub struct InfocardBuilder {
    pub lines: Vec<InfocardLine>,
}

impl InfocardBuilder {
    pub fn write_line_str(&mut self, text: impl Into<String>) {
        self.lines.push(InfocardLine::simple(text));
    }

    pub fn write_line(&mut self, phrase: InfocardPhrase) {
        self.lines.push(InfocardLine { phrases: vec![phrase] });
    }

    pub fn build(self) -> Infocard {
        self.lines
    }
}

pub fn infocard_to_plain_text(infocard: &[InfocardLine]) -> String {
    infocard.iter().map(|line| line.to_plain_string()).join("\n")
}
