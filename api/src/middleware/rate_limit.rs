//! Per-IP rate limiting middleware
//!
//! An in-memory token bucket per client IP. Each bucket holds up to `burst`
//! tokens and refills at `requests_per_second`. `OPTIONS` requests pass
//! through untouched so CORS preflights never consume tokens.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::{header, Method},
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    collections::HashMap,
    future::{ready, Ready},
    rc::Rc,
    sync::{Arc, Mutex, PoisonError},
    time::{Duration, Instant},
};

use sf_shared::config::RateLimitConfig;
use sf_shared::types::ErrorResponse;

/// Buckets untouched for this long are dropped
const BUCKET_IDLE_EXPIRY: Duration = Duration::from_secs(180);

/// How often idle buckets are swept
const CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy)]
struct TokenBucket {
    tokens: f64,
    last_seen: Instant,
}

/// Outcome of a rate limit check
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateLimitStatus {
    Allowed,
    /// Seconds until a token becomes available, rounded up
    Exceeded { retry_after_seconds: u64 },
}

struct BucketStore {
    buckets: HashMap<String, TokenBucket>,
    last_cleanup: Instant,
}

/// Rate limiter middleware factory
///
/// Clones share the same bucket store, so wrapping several resources with
/// clones of one limiter gives them a common per-IP budget.
#[derive(Clone)]
pub struct RateLimiter {
    store: Arc<Mutex<BucketStore>>,
    config: RateLimitConfig,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            store: Arc::new(Mutex::new(BucketStore {
                buckets: HashMap::new(),
                last_cleanup: Instant::now(),
            })),
            config,
        }
    }

    /// Take one token for `identifier` at `now`
    pub fn check_at(&self, identifier: &str, now: Instant) -> RateLimitStatus {
        if !self.config.enabled {
            return RateLimitStatus::Allowed;
        }

        let rate = f64::from(self.config.requests_per_second.max(1));
        let burst = f64::from(self.config.burst.max(1));

        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);

        if now.saturating_duration_since(store.last_cleanup) >= CLEANUP_INTERVAL {
            store
                .buckets
                .retain(|_, bucket| now.saturating_duration_since(bucket.last_seen) < BUCKET_IDLE_EXPIRY);
            store.last_cleanup = now;
        }

        let bucket = store
            .buckets
            .entry(identifier.to_string())
            .or_insert(TokenBucket {
                tokens: burst,
                last_seen: now,
            });

        let elapsed = now.saturating_duration_since(bucket.last_seen).as_secs_f64();
        bucket.tokens = (bucket.tokens + elapsed * rate).min(burst);
        bucket.last_seen = now;

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            RateLimitStatus::Allowed
        } else {
            let wait = ((1.0 - bucket.tokens) / rate).ceil().max(1.0);
            RateLimitStatus::Exceeded {
                retry_after_seconds: wait as u64,
            }
        }
    }

    /// Take one token for `identifier` now
    pub fn check(&self, identifier: &str) -> RateLimitStatus {
        self.check_at(identifier, Instant::now())
    }

    /// Number of clients currently tracked
    pub fn tracked_clients(&self) -> usize {
        self.store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .buckets
            .len()
    }
}

/// Middleware implementation for rate limiting
impl<S, B> Transform<S, ServiceRequest> for RateLimiter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimiterMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimiterMiddleware {
            service: Rc::new(service),
            limiter: self.clone(),
        }))
    }
}

/// Rate limiter middleware service
pub struct RateLimiterMiddleware<S> {
    service: Rc<S>,
    limiter: RateLimiter,
}

impl<S, B> Service<ServiceRequest> for RateLimiterMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut std::task::Context<'_>) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if req.method() == Method::OPTIONS {
            let fut = self.service.call(req);
            return Box::pin(async move { Ok(fut.await?.map_into_left_body()) });
        }

        let client_ip = client_identifier(&req);

        match self.limiter.check(&client_ip) {
            RateLimitStatus::Allowed => {
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            RateLimitStatus::Exceeded { retry_after_seconds } => {
                tracing::warn!(
                    client_ip = %client_ip,
                    path = %req.path(),
                    event = "rate_limited",
                    "Rate limit exceeded"
                );

                let response = HttpResponse::TooManyRequests()
                    .insert_header((header::RETRY_AFTER, retry_after_seconds.to_string()))
                    .json(ErrorResponse::new("RATE_LIMIT_EXCEEDED", "Too many requests"));

                Box::pin(async move { Ok(req.into_response(response).map_into_right_body()) })
            }
        }
    }
}

/// Client IP, honouring `Forwarded` / `X-Forwarded-For` from a reverse proxy
fn client_identifier(req: &ServiceRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .map(|addr| addr.split(',').next().unwrap_or(addr).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(per_second: u32, burst: u32) -> RateLimiter {
        RateLimiter::new(RateLimitConfig {
            enabled: true,
            requests_per_second: per_second,
            burst,
        })
    }

    #[test]
    fn test_burst_then_exceeded() {
        let limiter = limiter(1, 3);
        let now = Instant::now();

        for _ in 0..3 {
            assert_eq!(limiter.check_at("10.0.0.1", now), RateLimitStatus::Allowed);
        }
        assert_eq!(
            limiter.check_at("10.0.0.1", now),
            RateLimitStatus::Exceeded { retry_after_seconds: 1 }
        );
    }

    #[test]
    fn test_tokens_refill_over_time() {
        let limiter = limiter(1, 1);
        let start = Instant::now();

        assert_eq!(limiter.check_at("10.0.0.1", start), RateLimitStatus::Allowed);
        assert!(matches!(limiter.check_at("10.0.0.1", start), RateLimitStatus::Exceeded { .. }));
        assert_eq!(
            limiter.check_at("10.0.0.1", start + Duration::from_millis(1100)),
            RateLimitStatus::Allowed
        );
    }

    #[test]
    fn test_clients_are_independent() {
        let limiter = limiter(1, 1);
        let now = Instant::now();

        assert_eq!(limiter.check_at("10.0.0.1", now), RateLimitStatus::Allowed);
        assert_eq!(limiter.check_at("10.0.0.2", now), RateLimitStatus::Allowed);
        assert_eq!(limiter.tracked_clients(), 2);
    }

    #[test]
    fn test_idle_buckets_are_swept() {
        let limiter = limiter(1, 1);
        let start = Instant::now();

        limiter.check_at("10.0.0.1", start);
        limiter.check_at("10.0.0.2", start + BUCKET_IDLE_EXPIRY + CLEANUP_INTERVAL);

        assert_eq!(limiter.tracked_clients(), 1);
    }

    #[test]
    fn test_disabled_never_limits() {
        let limiter = RateLimiter::new(RateLimitConfig::disabled());
        let now = Instant::now();

        for _ in 0..10 {
            assert_eq!(limiter.check_at("10.0.0.1", now), RateLimitStatus::Allowed);
        }
    }
}
