//! Damage type vocabulary.

use super::{Dictionary, Term};

/// Damage type → localized name.
pub static DAMAGE_TYPES: Dictionary = Dictionary::new(
    "damage_types",
    &[
        Term::new("acid", "Acid", "Asit", "Aşındırıcı sıvılar ve sindirim enzimleri."),
        Term::new("bludgeoning", "Bludgeoning", "Ezici", "Çekiç, düşme ya da ezilme gibi künt darbeler."),
        Term::new("cold", "Cold", "Soğuk", "Dondurucu ayaz ve buzul rüzgarları."),
        Term::new("fire", "Fire", "Ateş", "Alevler ve yakıcı sıcaklık."),
        Term::new("force", "Force", "Kuvvet", "Saf büyülü enerji."),
        Term::new("lightning", "Lightning", "Yıldırım", "Elektrik boşalmaları."),
        Term::new("necrotic", "Necrotic", "Nekrotik", "Canlılığı çürüten ölüm enerjisi."),
        Term::new("piercing", "Piercing", "Delici", "Mızrak ucu, ok ya da diş gibi delip geçen saldırılar."),
        Term::new("poison", "Poison", "Zehir", "Zehirli iğneler ve toksik gazlar."),
        Term::new("psychic", "Psychic", "Psişik", "Zihne yönelik saldırılar."),
        Term::new("radiant", "Radiant", "Işıltı", "Kutsal güçle yüklü yakıcı ışık."),
        Term::new("slashing", "Slashing", "Kesici", "Kılıç, balta ve pençe gibi kesen saldırılar."),
        Term::new("thunder", "Thunder", "Gök Gürültüsü", "Sarsıcı ses patlamaları."),
    ],
);
