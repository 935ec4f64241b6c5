//! Shapes bodies, angles and lots into output records.

use crate::angles::{normalize, round_to};
use crate::chart::types::{PackedBody, PackedPoint, PlacedBody};
use crate::ephemeris::HousePositionSource;
use crate::houses::HouseResolver;
use crate::points::BodyReading;
use crate::zodiac::{degree_in_sign, Sign};

pub fn pack_body<S: HousePositionSource + ?Sized>(
    reading: &BodyReading,
    resolver: &HouseResolver<'_, S>,
) -> PackedBody {
    match reading {
        Ok(body) => {
            let placement = resolver.placement_of(body.longitude, body.latitude);
            PackedBody::Placed(PlacedBody {
                name: body.name.clone(),
                category: body.category,
                longitude: body.longitude,
                latitude: body.latitude,
                distance: body.distance,
                speed: body.motion.speed(),
                retrograde: body.is_retrograde(),
                sign: Sign::from_longitude(body.longitude),
                degree_in_sign: round_to(degree_in_sign(body.longitude), 4),
                house: placement.map(|p| p.house),
                house_position: placement.map(|p| p.position),
            })
        }
        Err(failure) => PackedBody::Failed {
            name: failure.name.clone(),
            error: failure.message.clone(),
        },
    }
}

/// Pack a stationary point; it is placed on the ecliptic
pub fn pack_point<S: HousePositionSource + ?Sized>(
    name: impl Into<String>,
    longitude: f64,
    resolver: &HouseResolver<'_, S>,
) -> PackedPoint {
    let longitude = normalize(longitude);
    let placement = resolver.placement_of(longitude, 0.0);
    PackedPoint {
        name: name.into(),
        longitude,
        sign: Sign::from_longitude(longitude),
        degree_in_sign: round_to(degree_in_sign(longitude), 4),
        house: placement.map(|p| p.house),
        house_position: placement.map(|p| p.position),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::{BodySpec, CannedEphemeris, HouseSystem, PointCategory, RawHouses, RawPosition};
    use crate::houses::HouseFrame;
    use crate::points::{Body, BodyFailure};

    fn frame() -> HouseFrame {
        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = 30.0 * i as f64;
        }
        let raw = RawHouses {
            cusps,
            asc: 0.0,
            mc: 270.0,
            armc: 272.0,
            vertex: 190.0,
        };
        HouseFrame::from_raw(&raw, HouseSystem::Equal, 40.0, 23.44)
    }

    #[test]
    fn test_pack_placed_body() {
        let ephemeris = CannedEphemeris::new().with_equal_houses(0.0, 272.0, 190.0);
        let frame = frame();
        let resolver = HouseResolver::new(&frame, &ephemeris);
        let spec = BodySpec::new("Mars", 4, PointCategory::Main);
        let reading = Ok(Body::from_reading(
            &spec,
            &RawPosition {
                longitude: 195.5,
                latitude: 1.2,
                distance: 1.4,
                speed: -0.3,
            },
        ));

        let packed = pack_body(&reading, &resolver);
        let body = packed.placed().unwrap();
        assert_eq!(body.sign, Sign::Libra);
        assert_eq!(body.degree_in_sign, 15.5);
        assert!(body.retrograde);
        assert_eq!(body.house, Some(7));
        assert!((body.house_position.unwrap() - 6.5167).abs() < 1e-9);
    }

    #[test]
    fn test_pack_failed_body_keeps_only_name_and_error() {
        let ephemeris = CannedEphemeris::new();
        let frame = frame();
        let resolver = HouseResolver::new(&frame, &ephemeris);
        let reading: BodyReading = Err(BodyFailure {
            name: "Chiron".into(),
            message: "seas_18.se1 not found".into(),
        });

        let packed = pack_body(&reading, &resolver);
        assert_eq!(packed.error(), Some("seas_18.se1 not found"));
        let json = serde_json::to_value(&packed).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Chiron", "error": "seas_18.se1 not found" })
        );
    }

    #[test]
    fn test_pack_point_without_house_position() {
        let ephemeris = CannedEphemeris::new().without_house_positions();
        let frame = frame();
        let resolver = HouseResolver::new(&frame, &ephemeris);

        let point = pack_point("Vertex", -170.0, &resolver);
        assert_eq!(point.longitude, 190.0);
        assert_eq!(point.sign, Sign::Libra);
        assert_eq!(point.house, None);
        let json = serde_json::to_value(&point).unwrap();
        assert!(json.get("house").is_none());
        assert!(json.get("name").is_none());
    }
}
