use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use fxhash::FxHashMap;
use tracing::{debug, trace};

use crate::context::{Diagnostic, EvaluationContext, Severity, TargetProvider};
use crate::errors::{EvaluationFailed, GenexResult};
use crate::evaluate;
use crate::parser::ParsedExpression;

/// Per-evaluation ambient parameters. The same expression text evaluated
/// under two different requests is two independent evaluations.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalRequest<'a> {
    pub head_target: Option<&'a str>,
    pub config: &'a str,
    pub language: Option<&'a str>,
}

/// The resolved value of one evaluation plus everything the engine had to
/// say about it. Diagnostics are never fatal here; see
/// [`GenexEngine::evaluate_checked`] for the hard-failure variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Evaluation {
    pub value: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl Evaluation {
    pub fn had_error(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    text: String,
    head_target: Option<String>,
    config: String,
    language: Option<String>,
}

impl CacheKey {
    fn new(text: &str, request: &EvalRequest<'_>) -> Self {
        CacheKey {
            text: text.to_owned(),
            head_target: request.head_target.map(str::to_owned),
            config: request.config.to_owned(),
            language: request.language.map(str::to_owned),
        }
    }
}

/// The evaluation entry point every consumer goes through.
///
/// One engine serves one generation run: it memoizes parses per expression
/// text and results per (text, head target, configuration, language) tuple.
/// Both caches are dropped wholesale by [`clear`](Self::clear) at run
/// boundaries — there is no cross-run persistence and no global state. For
/// parallel generation, give each worker its own engine; the node registry
/// they share is immutable.
pub struct GenexEngine<'p> {
    project: &'p dyn TargetProvider,
    parse_cache: RefCell<FxHashMap<String, Rc<ParsedExpression>>>,
    result_cache: RefCell<FxHashMap<CacheKey, String>>,
}

impl<'p> GenexEngine<'p> {
    pub fn new(project: &'p dyn TargetProvider) -> Self {
        GenexEngine {
            project,
            parse_cache: RefCell::new(FxHashMap::default()),
            result_cache: RefCell::new(FxHashMap::default()),
        }
    }

    /// Resolves `text` under `request`. Always produces a value; failures
    /// degrade the offending sub-expressions to empty strings and are
    /// reported through [`Evaluation::diagnostics`].
    pub fn evaluate(&self, text: &str, request: &EvalRequest<'_>) -> Evaluation {
        // The common case is a plain literal; don't parse or cache those.
        if !text.contains("$<") {
            return Evaluation {
                value: text.to_owned(),
                diagnostics: Vec::new(),
            };
        }

        let key = CacheKey::new(text, request);
        if let Some(value) = self.result_cache.borrow().get(&key) {
            trace!(text, "result cache hit");
            return Evaluation {
                value: value.clone(),
                diagnostics: Vec::new(),
            };
        }

        let parsed = self.parsed(text);
        let mut ctx = EvaluationContext::new(
            self.project,
            request.head_target,
            request.config,
            request.language,
        );
        let value = evaluate::evaluate_parsed(&parsed, &mut ctx, None);
        debug!(text, config = request.config, value = %value, "evaluated");

        let diagnostics = ctx.into_diagnostics();
        // Only clean evaluations are memoized: an expression that diagnosed
        // something must diagnose it again next time it is asked for.
        if diagnostics.is_empty() {
            self.result_cache.borrow_mut().insert(key, value.clone());
        }

        Evaluation { value, diagnostics }
    }

    /// Hard-failure variant of [`evaluate`](Self::evaluate): any
    /// error-severity diagnostic turns into an `Err` carrying the full
    /// diagnostic list.
    pub fn evaluate_checked(&self, text: &str, request: &EvalRequest<'_>) -> GenexResult<String> {
        let evaluation = self.evaluate(text, request);
        if evaluation.had_error() {
            let message = evaluation
                .diagnostics
                .iter()
                .find(|d| d.severity == Severity::Error)
                .map(|d| d.message.clone())
                .unwrap_or_default();
            return Err(EvaluationFailed {
                message,
                diagnostics: evaluation.diagnostics,
            })
            .with_context(|| format!("unable to evaluate `{text}`"));
        }
        Ok(evaluation.value)
    }

    fn parsed(&self, text: &str) -> Rc<ParsedExpression> {
        if let Some(parsed) = self.parse_cache.borrow().get(text) {
            return Rc::clone(parsed);
        }
        let parsed = Rc::new(ParsedExpression::parse(text));
        self.parse_cache
            .borrow_mut()
            .insert(text.to_owned(), Rc::clone(&parsed));
        parsed
    }

    /// Drops both caches. Call at the start of a generation run when reusing
    /// an engine across runs.
    pub fn clear(&self) {
        self.parse_cache.borrow_mut().clear();
        self.result_cache.borrow_mut().clear();
        debug!("cleared engine caches");
    }
}
