use std::borrow::Cow;

use clap::Args;
use cpfcnpj::{Cnpj, Cpf, Document, cnpj, cpf};

use crate::error::Result;
use crate::utils::read_value;

/// Which registry a value is treated as.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum KindArg {
    /// Detect CPF or CNPJ from the shape of the value
    Auto,
    /// Individual taxpayer number
    Cpf,
    /// Company taxpayer number
    Cnpj,
}

impl KindArg {
    pub(crate) fn is_valid(self, s: &str) -> bool {
        match self {
            KindArg::Auto => cpfcnpj::is_valid(s),
            KindArg::Cpf => cpf::is_valid(s),
            KindArg::Cnpj => cnpj::is_valid(s),
        }
    }

    pub(crate) fn format(self, s: &str) -> Cow<'_, str> {
        match self {
            KindArg::Auto => cpfcnpj::format(s),
            KindArg::Cpf => cpf::format(s),
            KindArg::Cnpj => cnpj::format(s),
        }
    }

    pub(crate) fn filter(self, s: &str) -> Cow<'_, str> {
        match self {
            KindArg::Auto => cpfcnpj::filter(s),
            KindArg::Cpf => cpf::filter(s),
            KindArg::Cnpj => cnpj::filter(s),
        }
    }

    pub(crate) fn parse(self, s: &str) -> cpfcnpj::Result<Document> {
        match self {
            KindArg::Auto => s.parse(),
            KindArg::Cpf => s.parse::<Cpf>().map(Document::from),
            KindArg::Cnpj => s.parse::<Cnpj>().map(Document::from),
        }
    }
}

#[derive(Args)]
pub(crate) struct Input {
    /// CPF or CNPJ, raw or formatted. If not specified, reads from stdin
    value: Option<String>,

    /// Treat the value as this kind instead of detecting it
    #[arg(short, long, value_enum, default_value = "auto")]
    kind: KindArg,
}

impl Input {
    pub(crate) fn read(&self) -> Result<String> {
        read_value(self.value.as_deref())
    }

    pub(crate) fn kind(&self) -> KindArg {
        self.kind
    }
}
