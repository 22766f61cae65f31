// Private module declaration
mod server;

use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry};

pub use server::start_metrics_server;

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - Menu, order, verification and login outcomes
// - HTTP request throughput and latency per route
//
// Scraped via /metrics on the dedicated metrics listener.
// ============================================================================

pub struct Metrics {
    registry: Registry,

    // Business Metrics
    pub menu_items_created: IntCounter,
    pub orders_placed: IntCounter,
    pub code_verifications: IntCounterVec,
    pub logins: IntCounterVec,
    pub registrations: IntCounter,

    // HTTP Metrics
    pub http_requests: IntCounterVec,
    pub http_request_duration: HistogramVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let menu_items_created = IntCounter::new(
            "menu_items_created_total",
            "Total menu items created",
        )?;
        registry.register(Box::new(menu_items_created.clone()))?;

        let orders_placed = IntCounter::new("orders_placed_total", "Total orders placed")?;
        registry.register(Box::new(orders_placed.clone()))?;

        let code_verifications = IntCounterVec::new(
            Opts::new("code_verifications_total", "Verification code checks by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(code_verifications.clone()))?;

        let logins = IntCounterVec::new(
            Opts::new("logins_total", "Login attempts by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(logins.clone()))?;

        let registrations = IntCounter::new("registrations_total", "Total users registered")?;
        registry.register(Box::new(registrations.clone()))?;

        let http_requests = IntCounterVec::new(
            Opts::new("http_requests_total", "HTTP requests by method, route and status"),
            &["method", "route", "status"],
        )?;
        registry.register(Box::new(http_requests.clone()))?;

        let http_request_duration = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "HTTP request duration")
                .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
            &["method", "route"],
        )?;
        registry.register(Box::new(http_request_duration.clone()))?;

        Ok(Self {
            registry,
            menu_items_created,
            orders_placed,
            code_verifications,
            logins,
            registrations,
            http_requests,
            http_request_duration,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_verification(&self, outcome: &str) {
        self.code_verifications.with_label_values(&[outcome]).inc();
    }

    pub fn record_login(&self, success: bool) {
        let outcome = if success { "success" } else { "rejected" };
        self.logins.with_label_values(&[outcome]).inc();
    }

    pub fn record_http_request(&self, method: &str, route: &str, status: u16, duration_secs: f64) {
        self.http_requests
            .with_label_values(&[method, route, &status.to_string()])
            .inc();
        self.http_request_duration
            .with_label_values(&[method, route])
            .observe(duration_secs);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
