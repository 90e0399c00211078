mod boolean;
mod targets;

pub(crate) mod support {
    use indexmap::IndexMap;

    use crate::context::{NoProject, TargetProvider};
    use crate::engine::{EvalRequest, Evaluation, GenexEngine};

    /// A minimal in-memory target collection for engine tests.
    #[derive(Debug, Default)]
    pub(crate) struct TestProject {
        targets: IndexMap<String, IndexMap<String, String>>,
    }

    impl TestProject {
        pub(crate) fn new() -> Self {
            Default::default()
        }

        pub(crate) fn with_target(mut self, name: &str) -> Self {
            self.targets.entry(name.to_owned()).or_default();
            self
        }

        pub(crate) fn with_property(mut self, target: &str, property: &str, value: &str) -> Self {
            self.targets
                .entry(target.to_owned())
                .or_default()
                .insert(property.to_owned(), value.to_owned());
            self
        }
    }

    impl TargetProvider for TestProject {
        fn target_exists(&self, name: &str) -> bool {
            self.targets.contains_key(name)
        }

        fn target_property(&self, target: &str, property: &str) -> Option<String> {
            self.targets.get(target)?.get(property).cloned()
        }

        fn link_interface(&self, target: &str) -> Vec<String> {
            self.target_property(target, "INTERFACE_LINK_LIBRARIES")
                .map(|value| {
                    genmake_util::split::split_list(&value)
                        .into_iter()
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default()
        }
    }

    /// Evaluates against an empty project, config "Debug".
    pub(crate) fn eval(text: &str) -> Evaluation {
        let project = NoProject;
        let engine = GenexEngine::new(&project);
        engine.evaluate(
            text,
            &EvalRequest {
                config: "Debug",
                ..Default::default()
            },
        )
    }

    pub(crate) fn eval_in(
        project: &dyn TargetProvider,
        text: &str,
        head_target: Option<&str>,
        config: &str,
    ) -> Evaluation {
        let engine = GenexEngine::new(project);
        engine.evaluate(
            text,
            &EvalRequest {
                head_target,
                config,
                language: None,
            },
        )
    }
}
