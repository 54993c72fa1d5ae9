use serde::{Deserialize, Serialize};

/// The complete, read-only record the page is rendered from.
/// Built once at startup and shared behind an `Arc`; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub personal: Personal,
    pub skills: Skills,
    pub experience: Vec<Job>,
    pub education: Education,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub role: String,
    pub location: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub summary: String,
}

impl Personal {
    /// First letter of the first and last name words, uppercased.
    /// Used as the avatar placeholder when no image can be shown.
    pub fn initials(&self) -> String {
        let mut words = self.name.split_whitespace();
        let Some(first) = words.next() else {
            return "?".to_string();
        };

        let mut initials: String = first.chars().take(1).flat_map(char::to_uppercase).collect();
        if let Some(last) = words.last() {
            initials.extend(last.chars().take(1).flat_map(char::to_uppercase));
        }
        initials
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub backend: Vec<String>,
    #[serde(default)]
    pub frontend: Vec<String>,
    #[serde(default)]
    pub mobile: Vec<String>,
    #[serde(default)]
    pub database: Vec<String>,
    #[serde(default)]
    pub devops: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Backend,
    Frontend,
    Mobile,
    DevOps,
    Database,
}

impl SkillCategory {
    /// Display order of the skills table.
    pub const DISPLAY_ORDER: [SkillCategory; 5] = [
        SkillCategory::Backend,
        SkillCategory::Frontend,
        SkillCategory::Mobile,
        SkillCategory::DevOps,
        SkillCategory::Database,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Backend => "Backend",
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Mobile => "Mobile",
            SkillCategory::DevOps => "DevOps",
            SkillCategory::Database => "Database",
        }
    }

    /// Icon glyph shown next to the row label.
    pub fn icon(&self) -> &'static str {
        match self {
            SkillCategory::Backend => "server",
            SkillCategory::Frontend => "code",
            SkillCategory::Mobile => "smartphone",
            SkillCategory::DevOps => "cloud",
            SkillCategory::Database => "database",
        }
    }
}

impl Skills {
    pub fn items(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Backend => &self.backend,
            SkillCategory::Frontend => &self.frontend,
            SkillCategory::Mobile => &self.mobile,
            SkillCategory::DevOps => &self.devops,
            SkillCategory::Database => &self.database,
        }
    }

    /// Rows of the skills table in display order.
    pub fn rows(&self) -> impl Iterator<Item = (SkillCategory, &[String])> + '_ {
        SkillCategory::DISPLAY_ORDER
            .into_iter()
            .map(move |category| (category, self.items(category)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: u32,
    pub role: String,
    pub company: String,
    /// Free-text date range, e.g. "Jun 2024 - July 2025".
    pub period: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub period: String,
    pub project: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn personal(name: &str) -> Personal {
        Personal {
            name: name.to_string(),
            role: "Engineer".to_string(),
            location: String::new(),
            email: "a@b.c".to_string(),
            linkedin: String::new(),
            github: String::new(),
            avatar: None,
            summary: String::new(),
        }
    }

    #[test]
    fn test_initials_two_words() {
        assert_eq!(personal("Thiha Linn").initials(), "TL");
    }

    #[test]
    fn test_initials_uses_first_and_last_word() {
        assert_eq!(personal("ada king lovelace").initials(), "AL");
    }

    #[test]
    fn test_initials_single_word() {
        assert_eq!(personal("Cher").initials(), "C");
    }

    #[test]
    fn test_initials_blank_name() {
        assert_eq!(personal("   ").initials(), "?");
    }

    #[test]
    fn test_mailto() {
        assert_eq!(personal("X").mailto(), "mailto:a@b.c");
    }

    #[test]
    fn test_skill_rows_follow_display_order() {
        let skills = Skills {
            backend: vec!["Rust".into()],
            frontend: vec![],
            mobile: vec![],
            database: vec!["Postgres".into()],
            devops: vec!["Docker".into()],
        };
        let labels: Vec<&str> = skills.rows().map(|(c, _)| c.label()).collect();
        assert_eq!(
            labels,
            vec!["Backend", "Frontend", "Mobile", "DevOps", "Database"]
        );
        let (_, devops) = skills.rows().nth(3).unwrap();
        assert_eq!(devops, &["Docker".to_string()]);
    }

    #[test]
    fn test_avatar_defaults_to_none_when_missing() {
        let json = r#"{"name":"A","role":"B","location":"","email":"a@b","linkedin":"","github":"","summary":""}"#;
        let p: Personal = serde_json::from_str(json).unwrap();
        assert!(p.avatar.is_none());
    }
}
