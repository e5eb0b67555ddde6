//! 결과 필드에 적용하는 반올림/올림 규칙.

/// 소수점 `decimals` 자리로 반올림한다. 0.5는 +∞ 방향으로 올린다(round-half-up).
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale + 0.5).floor() / scale
}

/// 가장 가까운 정수로 반올림한다(round-half-up).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// `step`의 배수로 올림한다. (예: 25 CFM, 250 CFM 단위)
pub fn ceil_to_step(value: f64, step: f64) -> f64 {
    (value / step).ceil() * step
}

/// 0.5 단위로 올림한다. 냉동톤(TR) 값에 사용한다.
pub fn ceil_to_half(value: f64) -> f64 {
    (value * 2.0).ceil() / 2.0
}

/// 소수점 `decimals` 자리에서 올림한다(scale → ceil → unscale).
pub fn ceil_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).ceil() / scale
}

/// 두 값 중 큰 값. 어느 한쪽이 NaN이면 NaN을 돌려준다(`f64::max`는 NaN을 버린다).
pub fn max_or_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}
