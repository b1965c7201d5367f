use crate::domain::series::{DataPoint, Field};
use chrono::NaiveDate;
use rand::Rng;

/// Uniform draw in [0, 1).
pub(crate) fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}

/// Uniform draw in [-width/2, width/2).
pub(crate) fn centered<R: Rng + ?Sized>(rng: &mut R, width: f64) -> f64 {
    (unit(rng) - 0.5) * width
}

/// `offset + U * scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub scale: f64,
    pub offset: f64,
}

impl Band {
    pub const fn new(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        unit(rng) * self.scale + self.offset
    }

    pub fn min(&self) -> f64 {
        self.offset
    }

    pub fn max(&self) -> f64 {
        self.offset + self.scale
    }
}

/// Bounds for the indicator fields attached to every synthesized day.
///
/// EMAs and the parabolic SAR are close-relative and identical for both
/// generators, so only the absolute fields vary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuxiliaryBounds {
    pub volatility: Band,
    pub roe: Band,
    pub roce: Band,
    pub peg_ratio: Band,
    /// Full width of the symmetric MACD range.
    pub macd_width: f64,
    pub rsi: Band,
}

/// Volume is drawn as a whole share count in [2e7, 1.2e8).
pub const VOLUME: Band = Band::new(100_000_000.0, 20_000_000.0);
pub const EMA_12_FACTOR: Band = Band::new(0.04, 0.98);
pub const EMA_26_FACTOR: Band = Band::new(0.06, 0.97);
pub const EMA_50_FACTOR: Band = Band::new(0.08, 0.96);
pub const PARABOLIC_SAR_FACTOR: Band = Band::new(0.1, 0.95);

pub const GAP_FILL_BOUNDS: AuxiliaryBounds = AuxiliaryBounds {
    volatility: Band::new(0.5, 0.1),
    roe: Band::new(2.0, 0.5),
    roce: Band::new(0.8, 0.2),
    peg_ratio: Band::new(3.0, 0.5),
    macd_width: 10.0,
    rsi: Band::new(100.0, 0.0),
};

pub const FALLBACK_BOUNDS: AuxiliaryBounds = AuxiliaryBounds {
    volatility: Band::new(0.4, 0.15),
    roe: Band::new(2.0, 0.8),
    roce: Band::new(0.6, 0.3),
    peg_ratio: Band::new(5.0, 0.5),
    macd_width: 8.0,
    rsi: Band::new(80.0, 10.0),
};

/// Builds one synthetic day around an already-chosen close.
pub(crate) fn synthesize_point<R: Rng + ?Sized>(
    date: NaiveDate,
    close: f64,
    bounds: &AuxiliaryBounds,
    rng: &mut R,
) -> DataPoint {
    let mut point = DataPoint::new(date);
    point.set(Field::Close, Some(close));
    point.set(Field::Volume, Some(VOLUME.sample(rng).floor()));
    point.set(Field::Volatility, Some(bounds.volatility.sample(rng)));
    point.set(Field::Roe, Some(bounds.roe.sample(rng)));
    point.set(Field::Roce, Some(bounds.roce.sample(rng)));
    point.set(Field::PegRatio, Some(bounds.peg_ratio.sample(rng)));
    point.set(Field::Macd, Some(centered(rng, bounds.macd_width)));
    point.set(Field::Ema12, Some(close * EMA_12_FACTOR.sample(rng)));
    point.set(Field::Ema26, Some(close * EMA_26_FACTOR.sample(rng)));
    point.set(Field::Ema50, Some(close * EMA_50_FACTOR.sample(rng)));
    point.set(Field::ParabolicSar, Some(close * PARABOLIC_SAR_FACTOR.sample(rng)));
    point.set(Field::Rsi, Some(bounds.rsi.sample(rng)));
    point
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_synthesized_fields_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let date = NaiveDate::from_ymd_opt(2019, 5, 1).unwrap();

        for bounds in [GAP_FILL_BOUNDS, FALLBACK_BOUNDS] {
            for _ in 0..500 {
                let p = synthesize_point(date, 100.0, &bounds, &mut rng);

                let volume = p.volume.unwrap();
                assert_eq!(volume, volume.floor());
                assert!((VOLUME.min()..=VOLUME.max()).contains(&volume));
                let volatility = p.volatility.unwrap();
                assert!((bounds.volatility.min()..=bounds.volatility.max()).contains(&volatility));
                assert!((bounds.roe.min()..=bounds.roe.max()).contains(&p.roe.unwrap()));
                assert!((bounds.roce.min()..=bounds.roce.max()).contains(&p.roce.unwrap()));
                let peg = p.peg_ratio.unwrap();
                assert!((bounds.peg_ratio.min()..=bounds.peg_ratio.max()).contains(&peg));
                assert!(p.macd.unwrap().abs() <= bounds.macd_width / 2.0);
                assert!((bounds.rsi.min()..=bounds.rsi.max()).contains(&p.rsi.unwrap()));
                assert!((98.0..=102.0).contains(&p.ema_12.unwrap()));
                assert!((97.0..=103.0).contains(&p.ema_26.unwrap()));
                assert!((96.0..=104.0).contains(&p.ema_50.unwrap()));
                assert!((95.0..=105.0).contains(&p.parabolic_sar.unwrap()));
            }
        }
    }
}
