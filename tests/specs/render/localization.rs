//! Localized unit names

use crate::prelude::*;

#[test]
fn portuguese_singulars_get_regular_plurals() {
    text("354h22m3.24s")
        .units(PORTUGUESE)
        .renders("2 semanas 18 horas 22 minutos 3 segundos");
    text("1h1m").units(PORTUGUESE).renders("1 hora 1 minuto");
}

#[test]
fn explicit_plurals_are_used_verbatim() {
    text("8760h1h")
        .units("año:años,semana:semanas,día:días,hora:horas,minuto:minutos,segundo:segundos,milisegundo:milisegundos,microsegundo:microsegundos")
        .renders("1 año 1 hora");
}

#[test]
fn zero_uses_the_localized_plural() {
    text("0s").units(PORTUGUESE).renders("0 segundos");
}

#[test]
fn format_renders_once_with_other_names() {
    let d = Durafmt::parse("-100s").unwrap();
    let portuguese = DEFAULT_UNITS_CODER.decode(PORTUGUESE).unwrap();
    assert_eq!(d.format(&portuguese), "-1 minuto 40 segundos");
    assert_eq!(d.to_string(), "-1 minute 40 seconds");
}

#[test]
fn vocabulary_survives_an_encode_decode_cycle() {
    let portuguese = DEFAULT_UNITS_CODER.decode(PORTUGUESE).unwrap();
    let encoded = DEFAULT_UNITS_CODER.encode(&portuguese);
    assert!(encoded.starts_with("ano:anos,semana:semanas,"));
    assert_eq!(DEFAULT_UNITS_CODER.decode(&encoded).unwrap(), portuguese);
}
