use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValidationRule {
    Required,
    Email,
    Url,
    Min,
    Max,
    Other(String),
}

impl ValidationRule {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "required" => ValidationRule::Required,
            "email" => ValidationRule::Email,
            "url" => ValidationRule::Url,
            "min" => ValidationRule::Min,
            "max" => ValidationRule::Max,
            other => ValidationRule::Other(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            ValidationRule::Required => "required",
            ValidationRule::Email => "email",
            ValidationRule::Url => "url",
            ValidationRule::Min => "min",
            ValidationRule::Max => "max",
            ValidationRule::Other(tag) => tag,
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
