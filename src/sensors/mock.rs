//! Mock sensor providers for testing and development
//!
//! Each mock is a cheap cloneable handle to shared scripted state, so a
//! test can keep one clone while the acquisition service owns another and
//! keep feeding samples or inspecting counters mid-run.

use crate::core::GeoCoordinate;
use crate::sensors::error::{LocationError, LocationResult, OrientationError, OrientationResult};
use crate::sensors::location::{LocationProvider, LocationRequest};
use crate::sensors::orientation::{
    OrientationProvider, OrientationSample, PermissionDecision, PermissionRequirement,
    SubscriptionToken,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

struct LocationScript {
    responses: VecDeque<LocationResult<GeoCoordinate>>,
    request_log: Vec<LocationRequest>,
    simulate_failures: bool,
    failure_probability: f32,
}

/// Mock location provider backed by a scripted response queue
#[derive(Clone)]
pub struct MockLocationProvider {
    inner: Rc<RefCell<LocationScript>>,
}

impl MockLocationProvider {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(LocationScript {
                responses: VecDeque::new(),
                request_log: Vec::new(),
                simulate_failures: false,
                failure_probability: 0.0,
            })),
        }
    }

    /// Queue a successful fix
    pub fn push_position(&self, latitude: f64, longitude: f64) {
        self.inner
            .borrow_mut()
            .responses
            .push_back(Ok(GeoCoordinate::new(latitude, longitude)));
    }

    /// Queue a classified failure
    pub fn push_failure(&self, error: LocationError) {
        self.inner.borrow_mut().responses.push_back(Err(error));
    }

    /// Enable random failure injection with given probability (0.0 to 1.0)
    pub fn simulate_failures(&self, enable: bool, probability: f32) {
        let mut inner = self.inner.borrow_mut();
        inner.simulate_failures = enable;
        inner.failure_probability = probability.clamp(0.0, 1.0);
    }

    /// All requests this provider has served, in order
    pub fn request_log(&self) -> Vec<LocationRequest> {
        self.inner.borrow().request_log.clone()
    }

    pub fn queued_response_count(&self) -> usize {
        self.inner.borrow().responses.len()
    }
}

impl Default for MockLocationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationScript {
    fn should_simulate_failure(&self) -> bool {
        if !self.simulate_failures {
            return false;
        }

        use rand::Rng;
        let mut rng = rand::thread_rng();
        rng.gen::<f32>() < self.failure_probability
    }
}

impl LocationProvider for MockLocationProvider {
    fn current_position(&mut self, request: &LocationRequest) -> LocationResult<GeoCoordinate> {
        let mut inner = self.inner.borrow_mut();
        inner.request_log.push(request.clone());

        if inner.should_simulate_failure() {
            return Err(LocationError::PositionUnavailable);
        }

        match inner.responses.pop_front() {
            Some(response) => response,
            None => Err(LocationError::Timeout {
                timeout_ms: request.timeout_ms,
            }),
        }
    }
}

struct OrientationScript {
    supported: bool,
    requirement: PermissionRequirement,
    decision: PermissionDecision,
    request_failure: Option<String>,
    samples: VecDeque<OrientationSample>,
    token_counter: u32,
    active: Option<SubscriptionToken>,
    permission_requests: u32,
    unsubscribe_count: u32,
}

/// Mock orientation provider with scripted samples and permission flow
#[derive(Clone)]
pub struct MockOrientationProvider {
    inner: Rc<RefCell<OrientationScript>>,
}

impl MockOrientationProvider {
    fn from_script(script: OrientationScript) -> Self {
        Self {
            inner: Rc::new(RefCell::new(script)),
        }
    }

    fn base_script() -> OrientationScript {
        OrientationScript {
            supported: true,
            requirement: PermissionRequirement::NotRequired,
            decision: PermissionDecision::Granted,
            request_failure: None,
            samples: VecDeque::new(),
            token_counter: 0,
            active: None,
            permission_requests: 0,
            unsubscribe_count: 0,
        }
    }

    /// A sensor that delivers samples without any permission prompt
    pub fn new() -> Self {
        Self::from_script(Self::base_script())
    }

    /// A device with no orientation sensor at all
    pub fn unsupported() -> Self {
        Self::from_script(OrientationScript {
            supported: false,
            ..Self::base_script()
        })
    }

    /// Gate the sensor behind a permission prompt answered with `decision`
    pub fn with_permission_prompt(decision: PermissionDecision) -> Self {
        Self::from_script(OrientationScript {
            requirement: PermissionRequirement::UserPrompt,
            decision,
            ..Self::base_script()
        })
    }

    /// Make the permission request itself fail
    pub fn with_failing_permission_request(details: &str) -> Self {
        Self::from_script(OrientationScript {
            requirement: PermissionRequirement::UserPrompt,
            request_failure: Some(details.to_string()),
            ..Self::base_script()
        })
    }

    /// Queue a sample carrying a device-frame alpha angle
    pub fn push_alpha(&self, alpha_deg: f64) {
        self.inner
            .borrow_mut()
            .samples
            .push_back(OrientationSample::new(alpha_deg));
    }

    /// Queue a sample with no usable heading value
    pub fn push_blank(&self) {
        self.inner
            .borrow_mut()
            .samples
            .push_back(OrientationSample::blank());
    }

    pub fn is_subscribed(&self) -> bool {
        self.inner.borrow().active.is_some()
    }

    pub fn permission_request_count(&self) -> u32 {
        self.inner.borrow().permission_requests
    }

    pub fn unsubscribe_count(&self) -> u32 {
        self.inner.borrow().unsubscribe_count
    }
}

impl Default for MockOrientationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl OrientationProvider for MockOrientationProvider {
    fn supported(&self) -> bool {
        self.inner.borrow().supported
    }

    fn permission_requirement(&self) -> PermissionRequirement {
        self.inner.borrow().requirement
    }

    fn request_permission(&mut self) -> OrientationResult<PermissionDecision> {
        let mut inner = self.inner.borrow_mut();
        inner.permission_requests += 1;

        if !inner.supported {
            return Err(OrientationError::Unsupported);
        }

        if let Some(details) = &inner.request_failure {
            return Err(OrientationError::RequestFailed {
                details: details.clone(),
            });
        }

        Ok(inner.decision)
    }

    fn subscribe(&mut self) -> OrientationResult<SubscriptionToken> {
        let mut inner = self.inner.borrow_mut();
        if !inner.supported {
            return Err(OrientationError::Unsupported);
        }

        inner.token_counter += 1;
        let token = SubscriptionToken::new(inner.token_counter);
        inner.active = Some(token);
        Ok(token)
    }

    fn poll_sample(&mut self, token: SubscriptionToken) -> Option<OrientationSample> {
        let mut inner = self.inner.borrow_mut();
        if inner.active != Some(token) {
            return None;
        }

        inner.samples.pop_front()
    }

    fn unsubscribe(&mut self, token: SubscriptionToken) {
        let mut inner = self.inner.borrow_mut();
        if inner.active == Some(token) {
            inner.active = None;
            inner.unsubscribe_count += 1;
        }
    }
}
