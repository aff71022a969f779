//! The attribute entry table.
//!
//! This is an abridged rendition of the registry of DICOM attributes
//! specified in PS3.6: the file meta group and the attributes of the
//! common patient, study, series, equipment and image modules.
//! Attributes absent from this table decode with VR `UN`
//! under implicit VR encoding.

use dcmbuf_core::dictionary::{DictionaryEntryRef, VirtualVr};
use dcmbuf_core::{Tag, VR};

const fn entry(
    group: u16,
    element: u16,
    alias: &'static str,
    vr: VR,
) -> DictionaryEntryRef<'static> {
    DictionaryEntryRef {
        tag: Tag(group, element),
        alias,
        vr: VirtualVr::Exact(vr),
    }
}

const fn entry_ox(group: u16, element: u16, alias: &'static str) -> DictionaryEntryRef<'static> {
    DictionaryEntryRef {
        tag: Tag(group, element),
        alias,
        vr: VirtualVr::Ox,
    }
}

/// The full table of supported attribute entries.
pub static ENTRIES: &[DictionaryEntryRef<'static>] = &[
    // group 0002: file meta information
    entry(0x0002, 0x0000, "FileMetaInformationGroupLength", VR::UL),
    entry(0x0002, 0x0001, "FileMetaInformationVersion", VR::OB),
    entry(0x0002, 0x0002, "MediaStorageSOPClassUID", VR::UI),
    entry(0x0002, 0x0003, "MediaStorageSOPInstanceUID", VR::UI),
    entry(0x0002, 0x0010, "TransferSyntaxUID", VR::UI),
    entry(0x0002, 0x0012, "ImplementationClassUID", VR::UI),
    entry(0x0002, 0x0013, "ImplementationVersionName", VR::SH),
    entry(0x0002, 0x0016, "SourceApplicationEntityTitle", VR::AE),
    entry(0x0002, 0x0100, "PrivateInformationCreatorUID", VR::UI),
    entry(0x0002, 0x0102, "PrivateInformation", VR::OB),
    // group 0008: identification and references
    entry(0x0008, 0x0005, "SpecificCharacterSet", VR::CS),
    entry(0x0008, 0x0008, "ImageType", VR::CS),
    entry(0x0008, 0x0012, "InstanceCreationDate", VR::DA),
    entry(0x0008, 0x0013, "InstanceCreationTime", VR::TM),
    entry(0x0008, 0x0016, "SOPClassUID", VR::UI),
    entry(0x0008, 0x0018, "SOPInstanceUID", VR::UI),
    entry(0x0008, 0x0020, "StudyDate", VR::DA),
    entry(0x0008, 0x0021, "SeriesDate", VR::DA),
    entry(0x0008, 0x0022, "AcquisitionDate", VR::DA),
    entry(0x0008, 0x0023, "ContentDate", VR::DA),
    entry(0x0008, 0x0030, "StudyTime", VR::TM),
    entry(0x0008, 0x0031, "SeriesTime", VR::TM),
    entry(0x0008, 0x0032, "AcquisitionTime", VR::TM),
    entry(0x0008, 0x0033, "ContentTime", VR::TM),
    entry(0x0008, 0x0050, "AccessionNumber", VR::SH),
    entry(0x0008, 0x0060, "Modality", VR::CS),
    entry(0x0008, 0x0064, "ConversionType", VR::CS),
    entry(0x0008, 0x0070, "Manufacturer", VR::LO),
    entry(0x0008, 0x0080, "InstitutionName", VR::LO),
    entry(0x0008, 0x0081, "InstitutionAddress", VR::ST),
    entry(0x0008, 0x0090, "ReferringPhysicianName", VR::PN),
    entry(0x0008, 0x0100, "CodeValue", VR::SH),
    entry(0x0008, 0x0102, "CodingSchemeDesignator", VR::SH),
    entry(0x0008, 0x0103, "CodingSchemeVersion", VR::SH),
    entry(0x0008, 0x0104, "CodeMeaning", VR::LO),
    entry(0x0008, 0x1010, "StationName", VR::SH),
    entry(0x0008, 0x1030, "StudyDescription", VR::LO),
    entry(0x0008, 0x103E, "SeriesDescription", VR::LO),
    entry(0x0008, 0x1040, "InstitutionalDepartmentName", VR::LO),
    entry(0x0008, 0x1048, "PhysiciansOfRecord", VR::PN),
    entry(0x0008, 0x1050, "PerformingPhysicianName", VR::PN),
    entry(0x0008, 0x1060, "NameOfPhysiciansReadingStudy", VR::PN),
    entry(0x0008, 0x1070, "OperatorsName", VR::PN),
    entry(0x0008, 0x1090, "ManufacturerModelName", VR::LO),
    entry(0x0008, 0x1110, "ReferencedStudySequence", VR::SQ),
    entry(0x0008, 0x1111, "ReferencedPerformedProcedureStepSequence", VR::SQ),
    entry(0x0008, 0x1115, "ReferencedSeriesSequence", VR::SQ),
    entry(0x0008, 0x1140, "ReferencedImageSequence", VR::SQ),
    entry(0x0008, 0x1150, "ReferencedSOPClassUID", VR::UI),
    entry(0x0008, 0x1155, "ReferencedSOPInstanceUID", VR::UI),
    entry(0x0008, 0x2218, "AnatomicRegionSequence", VR::SQ),
    // group 0010: patient
    entry(0x0010, 0x0010, "PatientName", VR::PN),
    entry(0x0010, 0x0020, "PatientID", VR::LO),
    entry(0x0010, 0x0021, "IssuerOfPatientID", VR::LO),
    entry(0x0010, 0x0030, "PatientBirthDate", VR::DA),
    entry(0x0010, 0x0032, "PatientBirthTime", VR::TM),
    entry(0x0010, 0x0040, "PatientSex", VR::CS),
    entry(0x0010, 0x1000, "OtherPatientIDs", VR::LO),
    entry(0x0010, 0x1010, "PatientAge", VR::AS),
    entry(0x0010, 0x1020, "PatientSize", VR::DS),
    entry(0x0010, 0x1030, "PatientWeight", VR::DS),
    entry(0x0010, 0x2160, "EthnicGroup", VR::SH),
    entry(0x0010, 0x21B0, "AdditionalPatientHistory", VR::LT),
    entry(0x0010, 0x4000, "PatientComments", VR::LT),
    // group 0018: acquisition
    entry(0x0018, 0x0015, "BodyPartExamined", VR::CS),
    entry(0x0018, 0x0020, "ScanningSequence", VR::CS),
    entry(0x0018, 0x0021, "SequenceVariant", VR::CS),
    entry(0x0018, 0x0022, "ScanOptions", VR::CS),
    entry(0x0018, 0x0023, "MRAcquisitionType", VR::CS),
    entry(0x0018, 0x0050, "SliceThickness", VR::DS),
    entry(0x0018, 0x0060, "KVP", VR::DS),
    entry(0x0018, 0x0080, "RepetitionTime", VR::DS),
    entry(0x0018, 0x0081, "EchoTime", VR::DS),
    entry(0x0018, 0x0083, "NumberOfAverages", VR::DS),
    entry(0x0018, 0x0084, "ImagingFrequency", VR::DS),
    entry(0x0018, 0x0087, "MagneticFieldStrength", VR::DS),
    entry(0x0018, 0x0088, "SpacingBetweenSlices", VR::DS),
    entry(0x0018, 0x0091, "EchoTrainLength", VR::IS),
    entry(0x0018, 0x0095, "PixelBandwidth", VR::DS),
    entry(0x0018, 0x1000, "DeviceSerialNumber", VR::LO),
    entry(0x0018, 0x1020, "SoftwareVersions", VR::LO),
    entry(0x0018, 0x1030, "ProtocolName", VR::LO),
    entry(0x0018, 0x1050, "SpatialResolution", VR::DS),
    entry(0x0018, 0x1151, "XRayTubeCurrent", VR::IS),
    entry(0x0018, 0x1152, "Exposure", VR::IS),
    entry(0x0018, 0x1160, "FilterType", VR::SH),
    entry(0x0018, 0x1164, "ImagerPixelSpacing", VR::DS),
    entry(0x0018, 0x1210, "ConvolutionKernel", VR::SH),
    entry(0x0018, 0x5100, "PatientPosition", VR::CS),
    // group 0020: relationship and positioning
    entry(0x0020, 0x000D, "StudyInstanceUID", VR::UI),
    entry(0x0020, 0x000E, "SeriesInstanceUID", VR::UI),
    entry(0x0020, 0x0010, "StudyID", VR::SH),
    entry(0x0020, 0x0011, "SeriesNumber", VR::IS),
    entry(0x0020, 0x0012, "AcquisitionNumber", VR::IS),
    entry(0x0020, 0x0013, "InstanceNumber", VR::IS),
    entry(0x0020, 0x0020, "PatientOrientation", VR::CS),
    entry(0x0020, 0x0032, "ImagePositionPatient", VR::DS),
    entry(0x0020, 0x0037, "ImageOrientationPatient", VR::DS),
    entry(0x0020, 0x0052, "FrameOfReferenceUID", VR::UI),
    entry(0x0020, 0x1002, "ImagesInAcquisition", VR::IS),
    entry(0x0020, 0x1040, "PositionReferenceIndicator", VR::LO),
    entry(0x0020, 0x1041, "SliceLocation", VR::DS),
    entry(0x0020, 0x4000, "ImageComments", VR::LT),
    // group 0028: image presentation
    entry(0x0028, 0x0002, "SamplesPerPixel", VR::US),
    entry(0x0028, 0x0004, "PhotometricInterpretation", VR::CS),
    entry(0x0028, 0x0006, "PlanarConfiguration", VR::US),
    entry(0x0028, 0x0008, "NumberOfFrames", VR::IS),
    entry(0x0028, 0x0010, "Rows", VR::US),
    entry(0x0028, 0x0011, "Columns", VR::US),
    entry(0x0028, 0x0030, "PixelSpacing", VR::DS),
    entry(0x0028, 0x0100, "BitsAllocated", VR::US),
    entry(0x0028, 0x0101, "BitsStored", VR::US),
    entry(0x0028, 0x0102, "HighBit", VR::US),
    entry(0x0028, 0x0103, "PixelRepresentation", VR::US),
    entry(0x0028, 0x0106, "SmallestImagePixelValue", VR::US),
    entry(0x0028, 0x0107, "LargestImagePixelValue", VR::US),
    entry(0x0028, 0x1050, "WindowCenter", VR::DS),
    entry(0x0028, 0x1051, "WindowWidth", VR::DS),
    entry(0x0028, 0x1052, "RescaleIntercept", VR::DS),
    entry(0x0028, 0x1053, "RescaleSlope", VR::DS),
    entry(0x0028, 0x1054, "RescaleType", VR::LO),
    entry(0x0028, 0x2110, "LossyImageCompression", VR::CS),
    entry(0x0028, 0x2112, "LossyImageCompressionRatio", VR::DS),
    entry(0x0028, 0x3000, "ModalityLUTSequence", VR::SQ),
    entry(0x0028, 0x3010, "VOILUTSequence", VR::SQ),
    // group 0032: study scheduling
    entry(0x0032, 0x1060, "RequestedProcedureDescription", VR::LO),
    // group 0040: procedure step and structured reporting
    entry(0x0040, 0x0244, "PerformedProcedureStepStartDate", VR::DA),
    entry(0x0040, 0x0245, "PerformedProcedureStepStartTime", VR::TM),
    entry(0x0040, 0x0253, "PerformedProcedureStepID", VR::SH),
    entry(0x0040, 0x0254, "PerformedProcedureStepDescription", VR::LO),
    entry(0x0040, 0x0260, "PerformedProtocolCodeSequence", VR::SQ),
    entry(0x0040, 0x0275, "RequestAttributesSequence", VR::SQ),
    entry(0x0040, 0xA043, "ConceptNameCodeSequence", VR::SQ),
    entry(0x0040, 0xA730, "ContentSequence", VR::SQ),
    // pixel data
    entry_ox(0x7FE0, 0x0010, "PixelData"),
    // item framing tags (no VR on the wire)
    entry(0xFFFE, 0xE000, "Item", VR::UN),
    entry(0xFFFE, 0xE00D, "ItemDelimitationItem", VR::UN),
    entry(0xFFFE, 0xE0DD, "SequenceDelimitationItem", VR::UN),
];
