//! Normalizing region order by strand.

use crate::pipeline::Error;
use crate::region::Region;
use crate::strand::Strand;

/// Orients a region list so that iteration order matches ascending genomic
/// position.
///
/// Positive-stranded lists are already in that order and pass through
/// unchanged. Negative-stranded lists arrive in transcript order (5′ to 3′,
/// which is descending genomic position), so they are reversed; "leftmost on
/// screen" then corresponds to increasing offset for both strands. A list
/// mixing both strands violates the input contract.
pub(crate) fn normalize(mut regions: Vec<Region>) -> Result<Vec<Region>, Error> {
    let strand = match regions.first() {
        Some(region) => region.strand().clone(),
        None => return Ok(regions),
    };

    if regions.iter().any(|region| *region.strand() != strand) {
        return Err(Error::MixedStrand);
    }

    if strand == Strand::Negative {
        regions.reverse();
    }

    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::FeatureType;

    #[test]
    fn test_positive_stranded_lists_pass_through() -> Result<(), Box<dyn std::error::Error>> {
        let regions = vec![
            Region::try_new(FeatureType::Cds, 100, 150, Strand::Positive)?,
            Region::try_new(FeatureType::Cds, 200, 250, Strand::Positive)?,
        ];

        let normalized = normalize(regions.clone())?;
        assert_eq!(normalized, regions);

        Ok(())
    }

    #[test]
    fn test_negative_stranded_lists_are_reversed() -> Result<(), Box<dyn std::error::Error>> {
        // Transcript order for a minus-strand gene: descending genomic
        // position.
        let regions = vec![
            Region::try_new(FeatureType::Cds, 200, 250, Strand::Negative)?,
            Region::try_new(FeatureType::Cds, 100, 150, Strand::Negative)?,
        ];

        let normalized = normalize(regions)?;

        assert_eq!(normalized[0].start(), 100);
        assert_eq!(normalized[1].start(), 200);

        Ok(())
    }

    #[test]
    fn test_mixed_strands_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let regions = vec![
            Region::try_new(FeatureType::Cds, 100, 150, Strand::Positive)?,
            Region::try_new(FeatureType::Cds, 200, 250, Strand::Negative)?,
        ];

        let err = normalize(regions).unwrap_err();
        assert_eq!(err, Error::MixedStrand);

        Ok(())
    }

    #[test]
    fn test_an_empty_list_passes_through() -> Result<(), Box<dyn std::error::Error>> {
        assert!(normalize(Vec::new())?.is_empty());
        Ok(())
    }
}
