//! Reference data: FEBRABAN bank codes and convenio segments.
//!
//! The table covers the institutions commonly seen on collection slips,
//! including a few defunct ones (boletos circulate for years). An unknown
//! code is not an error; the document is still valid, the name is just
//! unavailable.

static BANKS: &[(&str, &str)] = &[
    ("001", "Banco do Brasil"),
    ("033", "Banco Santander"),
    ("041", "Banrisul"),
    ("070", "BRB - Banco de Brasília"),
    ("077", "Banco Inter"),
    ("104", "Caixa Econômica Federal"),
    ("208", "Banco BTG Pactual"),
    ("212", "Banco Original"),
    ("237", "Banco Bradesco"),
    ("260", "Nu Pagamentos"),
    ("290", "PagSeguro Internet"),
    ("336", "Banco C6"),
    ("341", "Itaú Unibanco"),
    ("356", "Banco Real"),
    ("389", "Banco Mercantil do Brasil"),
    ("399", "HSBC Bank Brasil"),
    ("422", "Banco Safra"),
    ("633", "Banco Rendimento"),
    ("655", "Banco Votorantim"),
    ("707", "Banco Daycoval"),
    ("745", "Banco Citibank"),
    ("748", "Sicredi"),
    ("756", "Sicoob"),
];

pub(crate) fn bank_name(code: &str) -> Option<&'static str> {
    BANKS.iter().find(|(c, _)| *c == code).map(|(_, name)| *name)
}

/// Convenio segment names per the FEBRABAN layout; 8 is unassigned.
pub(crate) fn segment_name(segment: u8) -> Option<&'static str> {
    match segment {
        1 => Some("Prefeituras"),
        2 => Some("Saneamento"),
        3 => Some("Energia elétrica e gás"),
        4 => Some("Telecomunicações"),
        5 => Some("Órgãos governamentais"),
        6 => Some("Carnês e assemelhados"),
        7 => Some("Multas de trânsito"),
        9 => Some("Uso exclusivo do banco"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_codes() {
        assert_eq!(bank_name("001"), Some("Banco do Brasil"));
        assert_eq!(bank_name("237"), Some("Banco Bradesco"));
        assert_eq!(bank_name("000"), None);
        assert_eq!(segment_name(3), Some("Energia elétrica e gás"));
        assert_eq!(segment_name(8), None);
    }
}
