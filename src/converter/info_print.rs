use super::*;
use crate::algebra::*;
use std::io::Write;

impl<T> SparseConverter<T>
where
    T: ScalarT,
{
    /// Write a short conversion report when `verbose` is set
    pub(crate) fn print_conversion(&mut self, encoded: &EncodedMatrix<T>) -> std::io::Result<()> {
        if !self.settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;
        let info = &encoded.info;
        let (m, n, nnz) = (info.m, info.n, info.nnz);

        writeln!(out, "\nconversion:")?;
        writeln!(out, "  size          = {} x {}", m, n)?;
        writeln!(out, "  nnz           = {}", nnz)?;
        writeln!(out, "  sparsity      = {:.4}", info.sparsity)?;
        writeln!(
            out,
            "  format        = {} (requested \"{}\")",
            encoded.format(),
            self.settings.format
        )?;

        writeln!(out, "storage (words):")?;
        writeln!(out, "  dense         = {}", dense_storage(m, n))?;
        writeln!(out, "  coordinate    = {}", coordinate_storage(nnz))?;
        writeln!(out, "  csr           = {}", csr_storage(m, nnz))?;
        writeln!(
            out,
            "  csr preferred = {}",
            info.is_csr_more_efficient()
        )?;

        out.flush()?;
        std::io::Result::Ok(())
    }
}
