//! Profile construction and colorimetric round-trip tests

use lucentcms_core::color::white_point;
use lucentcms_core::{
    AdaptationMethod, Chromaticity, Error, Profile, Xyz, named, primaries_to_xyz_matrix,
};

#[test]
fn test_every_named_profile_constructs() {
    for p in &named::CHROMATICITY_PROFILES {
        let profile = Profile::from_named(p).unwrap();
        assert!(
            profile.rgb_to_xyz.multiply(&profile.xyz_to_rgb).is_identity(1e-6),
            "{}",
            p.name
        );
    }
    for p in &named::XYZ_PROFILES {
        let profile = Profile::from_named_xyz(p).unwrap();
        assert!(
            profile.rgb_to_xyz.multiply(&profile.xyz_to_rgb).is_identity(1e-6),
            "{}",
            p.name
        );
    }
}

#[test]
fn test_named_profile_rgb_roundtrip() {
    for p in &named::CHROMATICITY_PROFILES {
        let profile = Profile::from_named(p).unwrap();
        for rgb in [[0.1, 0.4, 0.9], [1.0, 1.0, 1.0], [0.5, 0.0, 0.2]] {
            let back = profile.from_xyz(profile.to_xyz(rgb));
            for c in 0..3 {
                assert!((back[c] - rgb[c]).abs() < 1e-5, "{} channel {c}", p.name);
            }
        }
    }
}

#[test]
fn test_srgb_matches_reference_primary() {
    // Red primary of sRGB per Lindbloom
    let profile = Profile::from_named(&named::SRGB).unwrap();
    let red = profile.rgb_to_xyz.multiply_vec([1.0, 0.0, 0.0]);
    assert!((red[0] - 0.4124564).abs() < 1e-3);
    assert!((red[1] - 0.2126729).abs() < 1e-3);
    assert!((red[2] - 0.0193339).abs() < 1e-3);
}

#[test]
fn test_colinear_primaries_degenerate() {
    let c = Chromaticity::new(0.3, 0.3);
    let result = primaries_to_xyz_matrix(Chromaticity::new(0.3127, 0.3290), c, c, c);
    assert!(matches!(result, Err(Error::DegenerateProfile)));
}

#[test]
fn test_adaptation_preserves_neutral_axis() {
    // Neutral grey stays neutral after adapting sRGB to D50
    let srgb = Profile::srgb();
    let adapted = srgb
        .adapted_to(white_point::D50.xyz, AdaptationMethod::Bradford)
        .unwrap();
    for grey in [0.2, 0.5, 0.9] {
        let xyz = adapted.to_xyz([grey, grey, grey]);
        let expected = white_point::D50.xyz.scale(xyz.y);
        assert!(xyz.approx_eq(&expected, 1e-3), "grey {grey}: {xyz:?}");
    }
}

#[test]
fn test_adaptation_roundtrip_recovers_profile() {
    let srgb = Profile::srgb();
    let there = srgb
        .adapted_to(white_point::D50.xyz, AdaptationMethod::Bradford)
        .unwrap();
    let back = there
        .adapted_to(white_point::D65.xyz, AdaptationMethod::Bradford)
        .unwrap();
    assert!(back.rgb_to_xyz.approx_eq(&srgb.rgb_to_xyz, 1e-5));
    assert!(back.white_point.approx_eq(&srgb.white_point, 1e-9));
}

#[test]
fn test_aces_profiles_are_linear() {
    for p in [&named::ACES_2065_1, &named::ACES_CG] {
        let profile = Profile::from_named_xyz(p).unwrap();
        for tc in &profile.tone_curves {
            assert_eq!(tc.decode(0.25), 0.25, "{}", p.name);
        }
    }
}

#[test]
fn test_dci_p3_white() {
    let profile = Profile::from_named_xyz(&named::DCI_P3).unwrap();
    let white = profile.to_xyz([1.0, 1.0, 1.0]);
    assert!(white.approx_eq(&Xyz::new(0.8946, 1.0, 0.9544), 1e-3));
}
