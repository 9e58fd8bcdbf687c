/// Context for the simple template: a name placeholder and a list to loop over.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Greeting {
    pub name: String,
    pub items: Vec<String>,
}

/// What every engine must produce for the simple template rendered against [`greeting`].
pub const GREETING_OUTPUT: &str = "Hello Bob! one two three four five ";

#[must_use]
pub fn greeting() -> Greeting {
    Greeting {
        name: "Bob".to_owned(),
        items: ["one", "two", "three", "four", "five"]
            .into_iter()
            .map(str::to_owned)
            .collect(),
    }
}
