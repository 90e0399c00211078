use crate::engine::{EvalRequest, Evaluation, GenexEngine};
use default_args::default_args;

extern crate self as _current_crate;

default_args! {
    pub fn crate::macros::evaluate(
        engine: &GenexEngine<'_>,
        text: &str,
        config: &str = "",
        head_target: Option<&str> = None,
        language: Option<&str> = None,
    ) -> Evaluation {
        engine.evaluate(
            text,
            &EvalRequest {
                head_target,
                config,
                language,
            },
        )
    }
}

pub(crate) use evaluate;
