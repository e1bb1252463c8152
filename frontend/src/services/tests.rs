use super::*;
use async_trait::async_trait;
use futures::executor::block_on;
use spamlens_common::api::ApiError;
use std::cell::RefCell;
use std::rc::Rc;

use crate::chart::{ChartLifecycle, DrawingSurface};
use crate::state::{ClassifierState, project};

/// 呼び出し回数と引数を記録するスタブゲートウェイ
#[derive(Default)]
struct StubGateway {
    classify_label: Option<String>,
    classify_calls: RefCell<Vec<String>>,
    train_ok: bool,
    train_calls: RefCell<usize>,
    metrics: Option<ModelMetrics>,
    metrics_calls: RefCell<usize>,
    visualizations: Option<VisualizationSet>,
    visualization_calls: RefCell<usize>,
}

#[async_trait(?Send)]
impl ClassifierGateway for StubGateway {
    async fn classify(&self, email_content: &str) -> Result<String, ApiError> {
        self.classify_calls
            .borrow_mut()
            .push(email_content.to_string());
        self.classify_label
            .clone()
            .ok_or_else(|| ApiError::Network("connection refused".to_string()))
    }

    async fn train(&self) -> Result<(), ApiError> {
        *self.train_calls.borrow_mut() += 1;
        if self.train_ok {
            Ok(())
        } else {
            Err(ApiError::Server("HTTP status server error (500)".to_string()))
        }
    }

    async fn fetch_metrics(&self) -> Result<ModelMetrics, ApiError> {
        *self.metrics_calls.borrow_mut() += 1;
        self.metrics
            .ok_or_else(|| ApiError::Parse("error decoding response body".to_string()))
    }

    async fn fetch_visualizations(&self) -> Result<VisualizationSet, ApiError> {
        *self.visualization_calls.borrow_mut() += 1;
        self.visualizations
            .clone()
            .ok_or_else(|| ApiError::Network("connection refused".to_string()))
    }
}

fn sample_metrics() -> ModelMetrics {
    ModelMetrics {
        accuracy: 0.95,
        precision: 0.9,
        recall: 0.88,
        f1: 0.89,
    }
}

fn sample_visualizations() -> VisualizationSet {
    // 中身は問わない。デコード可能なbase64であればよい
    VisualizationSet {
        data_distribution: "AAAA".to_string(),
        model_performance: "BBBB".to_string(),
        feature_importance: "CCCC".to_string(),
    }
}

#[test]
fn classify_commits_returned_label() {
    let gateway = Arc::new(StubGateway {
        classify_label: Some("spam".to_string()),
        ..Default::default()
    });
    let service = ClassifierService::new(gateway.clone());

    let mut state = ClassifierState::new();
    state.set_email_content("Buy now!!!".to_string());

    let result = block_on(service.classify(&state.email_content));
    match result {
        Ok(label) => state.commit_classification(label),
        Err(_) => {}
    }

    assert_eq!(state.classification.as_deref(), Some("spam"));
    assert_eq!(state.email_content, "Buy now!!!");
    assert_eq!(
        project(&state).classification_line.as_deref(),
        Some("Classification: spam")
    );
    assert_eq!(*gateway.classify_calls.borrow(), vec!["Buy now!!!"]);
}

#[test]
fn failed_classify_leaves_previous_result() {
    let gateway = Arc::new(StubGateway::default());
    let service = ClassifierService::new(gateway.clone());

    // 結果が未取得のままのケース
    let mut state = ClassifierState::new();
    assert!(block_on(service.classify("hello")).is_err());
    assert_eq!(state.classification, None);

    // 直前の結果が残るケース
    state.commit_classification("ham".to_string());
    match block_on(service.classify("hello")) {
        Ok(label) => state.commit_classification(label),
        Err(_) => {}
    }
    assert_eq!(state.classification.as_deref(), Some("ham"));
}

#[test]
fn metrics_are_never_fetched_when_train_fails() {
    let gateway = Arc::new(StubGateway {
        train_ok: false,
        metrics: Some(sample_metrics()),
        ..Default::default()
    });
    let service = ClassifierService::new(gateway.clone());

    let result = block_on(service.train_and_fetch_metrics());
    assert!(matches!(result, Err(ClassifierUiError::TrainFailed(_))));
    assert_eq!(*gateway.train_calls.borrow(), 1);
    assert_eq!(*gateway.metrics_calls.borrow(), 0);
}

#[test]
fn metrics_are_committed_after_train_succeeds() {
    let gateway = Arc::new(StubGateway {
        train_ok: true,
        metrics: Some(sample_metrics()),
        ..Default::default()
    });
    let service = ClassifierService::new(gateway.clone());

    let mut state = ClassifierState::new();
    match block_on(service.train_and_fetch_metrics()) {
        Ok(metrics) => state.commit_metrics(metrics),
        Err(_) => {}
    }

    assert_eq!(state.metrics, Some(sample_metrics()));
    assert_eq!(*gateway.train_calls.borrow(), 1);
    assert_eq!(*gateway.metrics_calls.borrow(), 1);
}

#[test]
fn metrics_failure_after_train_keeps_stale_state() {
    let gateway = Arc::new(StubGateway {
        train_ok: true,
        metrics: None,
        ..Default::default()
    });
    let service = ClassifierService::new(gateway.clone());

    let state = ClassifierState::new();
    let result = block_on(service.train_and_fetch_metrics());
    assert!(matches!(
        result,
        Err(ClassifierUiError::MetricsFetchFailed(_))
    ));
    assert_eq!(state.metrics, None);
    // 再学習自体はサーバー側で行われている
    assert_eq!(*gateway.train_calls.borrow(), 1);
}

#[test]
fn classify_and_train_never_touch_visualizations() {
    let gateway = Arc::new(StubGateway {
        classify_label: Some("ham".to_string()),
        train_ok: true,
        metrics: Some(sample_metrics()),
        visualizations: Some(sample_visualizations()),
        ..Default::default()
    });
    let service = ClassifierService::new(gateway.clone());

    block_on(service.classify("hello")).unwrap();
    block_on(service.train_and_fetch_metrics()).unwrap();

    assert_eq!(*gateway.visualization_calls.borrow(), 0);
}

#[test]
fn visualization_payloads_pass_through_unchanged() {
    let gateway = Arc::new(StubGateway {
        visualizations: Some(sample_visualizations()),
        ..Default::default()
    });
    let service = ClassifierService::new(gateway.clone());

    let mut state = ClassifierState::new();
    match block_on(service.fetch_visualizations()) {
        Ok(set) => state.commit_visualizations(set),
        Err(_) => {}
    }

    let images = project(&state).images.unwrap();
    assert_eq!(images[0].src, "data:image/png;base64,AAAA");
    assert_eq!(images[1].src, "data:image/png;base64,BBBB");
    assert_eq!(images[2].src, "data:image/png;base64,CCCC");
    assert_eq!(*gateway.visualization_calls.borrow(), 1);
}

/// bind/render/destroyの呼び出し順を共有ログに記録するサーフェス
struct LoggingSurface {
    events: Rc<RefCell<Vec<&'static str>>>,
}

impl DrawingSurface for LoggingSurface {
    fn bind(&mut self) -> Result<(), ClassifierUiError> {
        self.events.borrow_mut().push("bind");
        Ok(())
    }

    fn render(&mut self, _svg: &str) -> Result<(), ClassifierUiError> {
        self.events.borrow_mut().push("render");
        Ok(())
    }

    fn destroy(&mut self) {
        self.events.borrow_mut().push("destroy");
    }
}

#[test]
fn train_workflow_rebuilds_chart_with_one_destroy() {
    let gateway = Arc::new(StubGateway {
        train_ok: true,
        metrics: Some(sample_metrics()),
        ..Default::default()
    });
    let service = ClassifierService::new(gateway);

    let events = Rc::new(RefCell::new(Vec::new()));
    let mut lifecycle = ChartLifecycle::new(LoggingSurface {
        events: Rc::clone(&events),
    });

    // 事前に一度チャートを作っておく
    let mut state = ClassifierState::new();
    state.commit_metrics(ModelMetrics {
        accuracy: 0.5,
        precision: 0.5,
        recall: 0.5,
        f1: 0.5,
    });
    lifecycle.sync(state.metrics.as_ref()).unwrap();
    assert_eq!(*events.borrow(), vec!["bind", "render"]);

    // 再学習ワークフロー完了後のコミットで作り直される
    let metrics = block_on(service.train_and_fetch_metrics()).unwrap();
    state.commit_metrics(metrics);
    lifecycle.sync(state.metrics.as_ref()).unwrap();
    assert_eq!(
        *events.borrow(),
        vec!["bind", "render", "destroy", "bind", "render"]
    );

    let bars = project(&state).metric_bars.unwrap();
    assert_eq!(
        bars,
        [
            ("Accuracy", 0.95),
            ("Precision", 0.9),
            ("Recall", 0.88),
            ("F1 Score", 0.89),
        ]
    );
}

#[test]
fn undecodable_visualization_payload_is_rejected() {
    let gateway = Arc::new(StubGateway {
        visualizations: Some(VisualizationSet {
            data_distribution: "not valid base64!!!".to_string(),
            model_performance: "BBBB".to_string(),
            feature_importance: "CCCC".to_string(),
        }),
        ..Default::default()
    });
    let service = ClassifierService::new(gateway);

    let result = block_on(service.fetch_visualizations());
    assert!(matches!(
        result,
        Err(ClassifierUiError::VisualizationsFetchFailed(_))
    ));
}
