// Template registry - category -> ordered template names

/// One template category with its ordered template names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCategory {
    pub name: String,
    pub templates: Vec<String>,
}

/// Registry of configuration template categories.
///
/// Categories and template names are uppercased at the point of storage;
/// insertion order is preserved for both. A category may exist with no
/// templates (declared but unpopulated).
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    categories: Vec<TemplateCategory>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a category entry exists. Never resets an existing one.
    pub fn declare_category(&mut self, name: &str) {
        let name = name.to_uppercase();
        if !self.categories.iter().any(|entry| entry.name == name) {
            self.categories.push(TemplateCategory {
                name,
                templates: Vec::new(),
            });
        }
    }

    /// Append a template to a category, creating the category on first
    /// use. Duplicate templates within a category are not re-added.
    pub fn add_template(&mut self, category: &str, template: &str) {
        let category = category.to_uppercase();
        let template = template.to_uppercase();
        match self
            .categories
            .iter_mut()
            .find(|entry| entry.name == category)
        {
            Some(entry) => {
                if !entry.templates.contains(&template) {
                    entry.templates.push(template);
                }
            }
            None => self.categories.push(TemplateCategory {
                name: category,
                templates: vec![template],
            }),
        }
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.categories.iter().any(|entry| entry.name == name)
    }

    pub fn contains_template(&self, category: &str, template: &str) -> bool {
        self.categories
            .iter()
            .find(|entry| entry.name == category)
            .is_some_and(|entry| entry.templates.iter().any(|known| known == template))
    }

    pub fn get(&self, name: &str) -> Option<&TemplateCategory> {
        self.categories.iter().find(|entry| entry.name == name)
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &[TemplateCategory] {
        &self.categories
    }
}
