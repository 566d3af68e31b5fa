//! Topic catalog — modules, their ordered topics, and practice tasks.
//!
//! A [`Catalog`] is built once (from configuration or [`Catalog::builtin`])
//! and never mutated afterwards. Module lookup is case-insensitive and
//! ignores surrounding whitespace.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::CatalogError;

/// A study module: a named, ordered list of topics.
///
/// Topic order is meaningful. It is the order topics are scheduled in and
/// the order results are reported in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    pub topics: Vec<String>,
    /// Practice tasks keyed by exact topic name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub practice: BTreeMap<String, Vec<String>>,
}

impl Module {
    pub fn new<T: Into<String>>(name: impl Into<String>, topics: impl IntoIterator<Item = T>) -> Self {
        Self {
            name: name.into(),
            topics: topics.into_iter().map(Into::into).collect(),
            practice: BTreeMap::new(),
        }
    }

    /// Register practice tasks for one of this module's topics.
    pub fn with_practice<T: Into<String>>(
        mut self,
        topic: impl Into<String>,
        tasks: impl IntoIterator<Item = T>,
    ) -> Self {
        self.practice
            .insert(topic.into(), tasks.into_iter().map(Into::into).collect());
        self
    }

    /// Practice tasks for a topic; empty if none are registered.
    pub fn tasks_for(&self, topic: &str) -> &[String] {
        self.practice.get(topic).map(Vec::as_slice).unwrap_or(&[])
    }

    fn key(&self) -> String {
        normalize(&self.name)
    }
}

/// The immutable set of modules the coach knows about.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    modules: Vec<Module>,
}

impl Catalog {
    /// Build a catalog, rejecting modules without topics, blank or
    /// duplicate names, and practice tasks for unknown topics.
    pub fn new(modules: Vec<Module>) -> Result<Self, CatalogError> {
        let mut seen = Vec::with_capacity(modules.len());
        for module in &modules {
            let key = module.key();
            if key.is_empty() {
                return Err(CatalogError::BlankModuleName);
            }
            if seen.contains(&key) {
                return Err(CatalogError::DuplicateModule(module.name.clone()));
            }
            if module.topics.is_empty() {
                return Err(CatalogError::EmptyModule(module.name.clone()));
            }
            if let Some(topic) = module
                .practice
                .keys()
                .find(|t| !module.topics.contains(t))
            {
                return Err(CatalogError::UnknownPracticeTopic {
                    module: module.name.clone(),
                    topic: topic.clone(),
                });
            }
            seen.push(key);
        }
        Ok(Self { modules })
    }

    /// The catalog shipped with the coach: a single "Generative AI" module.
    pub fn builtin() -> Self {
        Self {
            modules: builtin_modules(),
        }
    }

    /// Look up a module by name (case-insensitive, whitespace-trimmed).
    pub fn module(&self, name: &str) -> Option<&Module> {
        let key = normalize(name);
        self.modules.iter().find(|m| m.key() == key)
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn into_modules(self) -> Vec<Module> {
        self.modules
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Modules compiled into the binary.
pub fn builtin_modules() -> Vec<Module> {
    vec![
        Module::new(
            "Generative AI",
            [
                "LLM fundamentals",
                "Prompt engineering",
                "OpenAI & Groq APIs",
                "LangChain basics",
                "Agents and Tools",
                "RAG",
                "Agent security & guardrails",
            ],
        )
        .with_practice(
            "LLM fundamentals",
            [
                "Explain in your own words what an LLM is and how it is trained.",
                "Compare two LLM architectures and list their pros/cons.",
            ],
        )
        .with_practice(
            "Prompt engineering",
            [
                "Write prompts in zero-shot, few-shot and chain-of-thought styles.",
                "Rewrite a vague prompt into a precise, constrained one.",
            ],
        )
        .with_practice(
            "LangChain basics",
            [
                "Build a simple LangChain LLMChain using a PromptTemplate.",
                "Create a LangChain chain that calls two steps in sequence.",
            ],
        )
        .with_practice(
            "Agents and Tools",
            [
                "Create a ReAct agent that uses at least two tools.",
                "Implement a custom LangChain tool and expose it to an agent.",
            ],
        )
        .with_practice(
            "RAG",
            [
                "Implement a basic RAG pipeline using a single PDF.",
                "Experiment with different chunk sizes and compare answer quality.",
            ],
        )
        .with_practice(
            "Agent security & guardrails",
            [
                "Design a simple prompt-based safety policy for your agent.",
                "Add checks to block obviously unsafe or irrelevant queries.",
            ],
        ),
    ]
}
