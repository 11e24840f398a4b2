/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use apigateway::model::{
    CacheClusterSize, DomainName, DomainNameStatus, MethodSetting, Stage,
    UnauthorizedCacheControlHeaderStrategy,
};
use proptest::prelude::*;
use proptest::sample::select;
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn rate() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<f64>(),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        Just(-0.0),
        Just(0.0),
    ]
}

fn method_setting() -> impl Strategy<Value = MethodSetting> {
    (
        proptest::option::of(any::<bool>()),
        proptest::option::of("OFF|ERROR|INFO"),
        proptest::option::of(any::<i32>()),
        proptest::option::of(rate()),
        proptest::option::of(0..3600i32),
        proptest::option::of(select(UnauthorizedCacheControlHeaderStrategy::values())),
    )
        .prop_map(
            |(metrics, logging_level, burst, rate, ttl, strategy)| {
                let mut builder = MethodSetting::builder();
                builder
                    .set_metrics_enabled(metrics)
                    .set_logging_level(logging_level)
                    .set_throttling_burst_limit(burst)
                    .set_throttling_rate_limit(rate)
                    .set_cache_ttl_in_seconds(ttl)
                    .set_unauthorized_cache_control_header_strategy(strategy.map(Into::into));
                builder.build()
            },
        )
}

fn stage() -> impl Strategy<Value = Stage> {
    (
        proptest::option::of("[a-z]{1,8}"),
        proptest::option::of(select(CacheClusterSize::values())),
        proptest::option::of(proptest::collection::btree_map(
            "[A-Z]{3,6}/\\*",
            method_setting(),
            0..4,
        )),
        proptest::option::of(proptest::collection::btree_map("[a-z]{1,5}", "[a-z0-9]{0,5}", 0..4)),
        proptest::option::of(0..2_000_000_000i64),
    )
        .prop_map(|(name, size, settings, variables, created)| {
            let mut builder = Stage::builder();
            builder
                .set_stage_name(name)
                .set_cache_cluster_size(size.map(Into::into))
                .set_method_settings(settings)
                .set_variables(variables)
                .set_created_date(created.map(apigateway::Instant::from_epoch_seconds));
            builder.build()
        })
}

proptest! {
    #[test]
    fn equality_is_reflexive_and_hash_is_stable(stage in stage()) {
        prop_assert_eq!(&stage, &stage);
        prop_assert_eq!(hash_of(&stage), hash_of(&stage));
        let copy = stage.clone();
        prop_assert_eq!(&copy, &stage);
        prop_assert_eq!(hash_of(&copy), hash_of(&stage));
        prop_assert_eq!(copy.to_string(), stage.to_string());
    }

    #[test]
    fn one_differing_field_breaks_equality(setting in method_setting(), a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(a != b);
        let left = setting.clone().into_builder().cache_ttl_in_seconds(a).build();
        let right = setting.into_builder().cache_ttl_in_seconds(b).build();
        prop_assert_ne!(left, right);
    }

    #[test]
    fn rebuilding_is_lossless(setting in method_setting()) {
        let rebuilt = setting.clone().into_builder().build();
        prop_assert_eq!(hash_of(&rebuilt), hash_of(&setting));
        prop_assert_eq!(rebuilt, setting);
    }

    #[test]
    fn literal_and_variant_setters_agree(literal in select(DomainNameStatus::values())) {
        let variant = DomainNameStatus::from(literal);
        let from_literal = DomainName::builder().domain_name("api.example.com").domain_name_status(literal).build();
        let from_variant = DomainName::builder().domain_name("api.example.com").domain_name_status(variant).build();
        prop_assert_eq!(&from_literal, &from_variant);
        prop_assert_eq!(from_literal.to_string(), from_variant.to_string());
        prop_assert_eq!(hash_of(&from_literal), hash_of(&from_variant));
    }

    #[test]
    fn duplicate_keys_never_overwrite(
        key in "[A-Z]{3}/\\*",
        first in method_setting(),
        second in method_setting(),
    ) {
        let builder = Stage::builder().method_settings(key.clone(), first.clone()).unwrap();
        let before = builder.clone().build();
        let err = builder.clone().method_settings(key.clone(), second).unwrap_err();
        prop_assert_eq!(err.key(), key.as_str());
        prop_assert_eq!(builder.build(), before.clone());
        prop_assert_eq!(before.method_settings().and_then(|settings| settings.get(&key)), Some(&first));
    }

    #[test]
    fn rejected_entry_leaves_the_builder_intact(
        key in "[A-Z]{3}/\\*",
        name in "[a-z]{1,8}",
        first in method_setting(),
        second in method_setting(),
    ) {
        let mut builder = Stage::builder().stage_name(name.clone()).tracing_enabled(true);
        builder.add_method_settings_entry(key.clone(), first.clone()).unwrap();
        let err = builder.add_method_settings_entry(key.clone(), second).unwrap_err();
        prop_assert_eq!(err.key(), key.as_str());

        let stage = builder.build();
        prop_assert_eq!(stage.stage_name(), Some(name.as_str()));
        prop_assert_eq!(stage.tracing_enabled(), Some(true));
        let settings = stage.method_settings().expect("settings survive");
        prop_assert_eq!(settings.len(), 1);
        prop_assert_eq!(settings.get(&key), Some(&first));
    }

    #[test]
    fn special_rates_equal_themselves(rate in rate()) {
        let setting = MethodSetting::builder().throttling_rate_limit(rate).build();
        prop_assert_eq!(&setting, &setting.clone());
        prop_assert_eq!(hash_of(&setting), hash_of(&setting.clone()));
        let stage = Stage::builder().method_settings("*/*", setting.clone()).unwrap().build();
        prop_assert_eq!(&stage, &stage.clone());
        prop_assert_eq!(hash_of(&stage), hash_of(&stage.clone()));
    }
}

#[test]
fn absent_map_differs_from_empty_map() {
    let absent = Stage::builder().build();
    let empty = {
        let mut builder = Stage::builder();
        builder.set_variables(Some(BTreeMap::new()));
        builder.build()
    };
    assert_ne!(absent, empty);
    assert_ne!(hash_of(&absent), hash_of(&empty));
    assert_eq!(absent.variables(), None);
    assert_eq!(empty.variables(), Some(&BTreeMap::new()));
    assert_eq!(empty.to_string(), "{variables: {}}");
}

#[test]
fn clearing_makes_the_field_absent() {
    let mut builder = Stage::builder()
        .variables("stage", "prod")
        .unwrap()
        .method_settings("*/*", MethodSetting::builder().metrics_enabled(true))
        .unwrap();
    builder.clear_variables();
    builder.set_method_settings(None);
    let stage = builder.build();
    assert_eq!(stage.variables(), None);
    assert_eq!(stage.method_settings(), None);
    assert_eq!(stage, Stage::default());
}

#[test]
fn setters_chain_on_the_same_builder() {
    let mut builder = Stage::builder();
    let ptr: *const _ = &builder;
    let returned = builder
        .set_stage_name(Some("prod".to_string()))
        .set_tracing_enabled(Some(true))
        .clear_tags();
    assert!(std::ptr::eq(returned, ptr));
}

#[test]
fn rendering_lists_only_set_fields() {
    assert_eq!(Stage::default().to_string(), "{}");
    assert_eq!(MethodSetting::default().to_string(), "{}");
    assert_eq!(
        Stage::builder().tracing_enabled(false).build().to_string(),
        "{tracingEnabled: false}"
    );
}
