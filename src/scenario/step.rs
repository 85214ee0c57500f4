use super::context::ScenarioContext;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;

/// 場景中的一個步驟。`should_run` 讓步驟把「跳過」條件宣告出來
/// （例如：搜尋結果為零 ⇒ 項目已存在 ⇒ 不再新增），而不是在步驟
/// 內部默默 return。
#[async_trait]
pub trait ScenarioStep: Send + Sync {
    fn name(&self) -> &str;

    fn should_run(&self, _ctx: &ScenarioContext) -> bool {
        true
    }

    /// Reported when `should_run` returns false.
    fn skip_reason(&self, _ctx: &ScenarioContext) -> String {
        "precondition not met".to_string()
    }

    async fn run(&self, ctx: &mut ScenarioContext) -> Result<()>;
}

pub type StepFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

type StepBody = Box<dyn for<'a> Fn(&'a mut ScenarioContext) -> StepFuture<'a> + Send + Sync>;
type StepPredicate = Box<dyn Fn(&ScenarioContext) -> bool + Send + Sync>;

/// Closure-backed step, the building block of the scenario scripts.
pub struct FnStep {
    name: String,
    body: StepBody,
    precondition: Option<StepPredicate>,
    skip_reason: String,
}

impl FnStep {
    pub fn new<F>(name: &str, body: F) -> Self
    where
        F: for<'a> Fn(&'a mut ScenarioContext) -> StepFuture<'a> + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            body: Box::new(body),
            precondition: None,
            skip_reason: "precondition not met".to_string(),
        }
    }

    /// Declares when this step runs; `reason` is reported on skip.
    pub fn with_precondition<P>(mut self, reason: &str, predicate: P) -> Self
    where
        P: Fn(&ScenarioContext) -> bool + Send + Sync + 'static,
    {
        self.precondition = Some(Box::new(predicate));
        self.skip_reason = reason.to_string();
        self
    }
}

#[async_trait]
impl ScenarioStep for FnStep {
    fn name(&self) -> &str {
        &self.name
    }

    fn should_run(&self, ctx: &ScenarioContext) -> bool {
        self.precondition.as_ref().map(|p| p(ctx)).unwrap_or(true)
    }

    fn skip_reason(&self, _ctx: &ScenarioContext) -> String {
        self.skip_reason.clone()
    }

    async fn run(&self, ctx: &mut ScenarioContext) -> Result<()> {
        (self.body)(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn fn_step_runs_body_against_context() {
        let tmp = TempDir::new().unwrap();
        let mut ctx = ScenarioContext::new("demo", tmp.path()).unwrap();

        let step = FnStep::new("record", |ctx| {
            Box::pin(async move {
                ctx.set_value("ran", true);
                Ok(())
            })
        });

        assert!(step.should_run(&ctx));
        step.run(&mut ctx).await.unwrap();
        assert_eq!(ctx.value_bool("ran"), Some(true));
    }

    #[tokio::test]
    async fn precondition_controls_should_run() {
        let tmp = TempDir::new().unwrap();
        let mut ctx = ScenarioContext::new("demo", tmp.path()).unwrap();
        ctx.set_value("search-rows", 0);

        let step = FnStep::new("add-item", |_ctx| Box::pin(async { Ok(()) }))
            .with_precondition("item already present in the bottom table", |ctx| {
                ctx.value_i64("search-rows").unwrap_or(0) > 0
            });

        assert!(!step.should_run(&ctx));
        assert_eq!(
            step.skip_reason(&ctx),
            "item already present in the bottom table"
        );

        ctx.set_value("search-rows", 2);
        assert!(step.should_run(&ctx));
    }
}
