//! Namespace 0 numeric ids and their `NodeIds.csv` symbolic names.

// Sorted by id; `name_of` relies on it.
pub(crate) static WELL_KNOWN: &[(u32, &str)] = &[
    (1, "Boolean"),
    (2, "SByte"),
    (3, "Byte"),
    (4, "Int16"),
    (5, "UInt16"),
    (6, "Int32"),
    (7, "UInt32"),
    (8, "Int64"),
    (9, "UInt64"),
    (10, "Float"),
    (11, "Double"),
    (12, "String"),
    (13, "DateTime"),
    (14, "Guid"),
    (15, "ByteString"),
    (16, "XmlElement"),
    (17, "NodeId"),
    (18, "ExpandedNodeId"),
    (19, "StatusCode"),
    (20, "QualifiedName"),
    (21, "LocalizedText"),
    (22, "Structure"),
    (23, "DataValue"),
    (24, "BaseDataType"),
    (25, "DiagnosticInfo"),
    (26, "Number"),
    (27, "Integer"),
    (28, "UInteger"),
    (29, "Enumeration"),
    (30, "Image"),
    (31, "References"),
    (32, "NonHierarchicalReferences"),
    (33, "HierarchicalReferences"),
    (34, "HasChild"),
    (35, "Organizes"),
    (36, "HasEventSource"),
    (37, "HasModellingRule"),
    (38, "HasEncoding"),
    (39, "HasDescription"),
    (40, "HasTypeDefinition"),
    (41, "GeneratesEvent"),
    (44, "Aggregates"),
    (45, "HasSubtype"),
    (46, "HasProperty"),
    (47, "HasComponent"),
    (48, "HasNotifier"),
    (49, "HasOrderedComponent"),
    (50, "Decimal"),
    (51, "FromState"),
    (52, "ToState"),
    (53, "HasCause"),
    (54, "HasEffect"),
    (56, "HasHistoricalConfiguration"),
    (58, "BaseObjectType"),
    (61, "FolderType"),
    (62, "BaseVariableType"),
    (63, "BaseDataVariableType"),
    (68, "PropertyType"),
    (69, "DataTypeDescriptionType"),
    (72, "DataTypeDictionaryType"),
    (75, "DataTypeSystemType"),
    (76, "DataTypeEncodingType"),
    (77, "ModellingRuleType"),
    (78, "ModellingRule_Mandatory"),
    (80, "ModellingRule_Optional"),
    (83, "ModellingRule_ExposesItsArray"),
    (84, "RootFolder"),
    (85, "ObjectsFolder"),
    (86, "TypesFolder"),
    (87, "ViewsFolder"),
    (88, "ObjectTypesFolder"),
    (89, "VariableTypesFolder"),
    (90, "DataTypesFolder"),
    (91, "ReferenceTypesFolder"),
    (92, "XmlSchema_TypeSystem"),
    (93, "OPCBinarySchema_TypeSystem"),
    (94, "PermissionType"),
    (95, "AccessRestrictionType"),
    (96, "RolePermissionType"),
    (97, "DataTypeDefinition"),
    (98, "StructureType"),
    (99, "StructureDefinition"),
    (100, "EnumDefinition"),
    (101, "StructureField"),
    (102, "EnumField"),
    (104, "DataTypeDescriptionType_DataTypeVersion"),
    (105, "DataTypeDescriptionType_DictionaryFragment"),
    (106, "DataTypeDictionaryType_DataTypeVersion"),
    (107, "DataTypeDictionaryType_NamespaceUri"),
    (111, "ModellingRuleType_NamingRule"),
    (112, "ModellingRule_Mandatory_NamingRule"),
    (113, "ModellingRule_Optional_NamingRule"),
    (114, "ModellingRule_ExposesItsArray_NamingRule"),
    (117, "HasSubStateMachine"),
    (120, "NamingRuleType"),
    (256, "IdType"),
    (257, "NodeClass"),
    (288, "IntegerId"),
    (289, "Counter"),
    (290, "Duration"),
    (291, "NumericRange"),
    (292, "Time"),
    (293, "Date"),
    (294, "UtcTime"),
    (295, "LocaleId"),
    (296, "Argument"),
    (297, "Argument_Encoding_DefaultXml"),
    (298, "Argument_Encoding_DefaultBinary"),
    (299, "StatusResult"),
    (302, "MessageSecurityMode"),
    (303, "UserTokenType"),
    (304, "UserTokenPolicy"),
    (307, "ApplicationType"),
    (308, "ApplicationDescription"),
    (311, "ApplicationInstanceCertificate"),
    (312, "EndpointDescription"),
    (315, "SecurityTokenRequestType"),
    (316, "UserIdentityToken"),
    (319, "AnonymousIdentityToken"),
    (322, "UserNameIdentityToken"),
    (325, "X509IdentityToken"),
    (331, "EndpointConfiguration"),
    (338, "BuildInfo"),
    (344, "SignedSoftwareCertificate"),
    (347, "AttributeWriteMask"),
    (348, "NodeAttributesMask"),
    (376, "AddNodesItem"),
    (379, "AddReferencesItem"),
    (382, "DeleteNodesItem"),
    (385, "DeleteReferencesItem"),
    (388, "SessionAuthenticationToken"),
    (432, "RegisteredServer"),
    (521, "ContinuationPoint"),
    (537, "RelativePathElement"),
    (540, "RelativePath"),
    (576, "FilterOperator"),
    (583, "ContentFilterElement"),
    (586, "ContentFilter"),
    (589, "FilterOperand"),
    (592, "ElementOperand"),
    (595, "LiteralOperand"),
    (598, "AttributeOperand"),
    (601, "SimpleAttributeOperand"),
    (659, "HistoryEvent"),
    (719, "MonitoringFilter"),
    (725, "EventFilter"),
    (851, "RedundancySupport"),
    (852, "ServerState"),
    (853, "RedundantServerDataType"),
    (856, "SamplingIntervalDiagnosticsDataType"),
    (859, "ServerDiagnosticsSummaryDataType"),
    (862, "ServerStatusDataType"),
    (865, "SessionDiagnosticsDataType"),
    (868, "SessionSecurityDiagnosticsDataType"),
    (871, "ServiceCounterDataType"),
    (874, "ModelChangeStructureDataType"),
    (877, "SubscriptionDiagnosticsDataType"),
    (884, "Range"),
    (887, "EUInformation"),
    (890, "ExceptionDeviationFormat"),
    (891, "Annotation"),
    (894, "ProgramDiagnosticDataType"),
    (897, "SemanticChangeStructureDataType"),
    (920, "HistoryEventFieldList"),
    (948, "AggregateConfiguration"),
    (2000, "ImageBMP"),
    (2001, "ImageGIF"),
    (2002, "ImageJPG"),
    (2003, "ImagePNG"),
    (2004, "ServerType"),
    (2013, "ServerCapabilitiesType"),
    (2020, "ServerDiagnosticsType"),
    (2026, "SessionsDiagnosticsSummaryType"),
    (2029, "SessionDiagnosticsObjectType"),
    (2033, "VendorServerInfoType"),
    (2034, "ServerRedundancyType"),
    (2036, "TransparentRedundancyType"),
    (2039, "NonTransparentRedundancyType"),
    (2041, "BaseEventType"),
    (2052, "AuditEventType"),
    (2058, "AuditSecurityEventType"),
    (2059, "AuditChannelEventType"),
    (2060, "AuditOpenSecureChannelEventType"),
    (2069, "AuditSessionEventType"),
    (2071, "AuditCreateSessionEventType"),
    (2075, "AuditActivateSessionEventType"),
    (2078, "AuditCancelEventType"),
    (2080, "AuditCertificateEventType"),
    (2090, "AuditNodeManagementEventType"),
    (2091, "AuditAddNodesEventType"),
    (2093, "AuditDeleteNodesEventType"),
    (2095, "AuditAddReferencesEventType"),
    (2097, "AuditDeleteReferencesEventType"),
    (2099, "AuditUpdateEventType"),
    (2100, "AuditWriteUpdateEventType"),
    (2104, "AuditHistoryUpdateEventType"),
    (2127, "AuditUpdateMethodEventType"),
    (2130, "SystemEventType"),
    (2131, "DeviceFailureEventType"),
    (2132, "BaseModelChangeEventType"),
    (2133, "GeneralModelChangeEventType"),
    (2137, "ServerVendorCapabilityType"),
    (2138, "ServerStatusType"),
    (2150, "ServerDiagnosticsSummaryType"),
    (2164, "SamplingIntervalDiagnosticsArrayType"),
    (2165, "SamplingIntervalDiagnosticsType"),
    (2171, "SubscriptionDiagnosticsArrayType"),
    (2172, "SubscriptionDiagnosticsType"),
    (2196, "SessionDiagnosticsArrayType"),
    (2197, "SessionDiagnosticsVariableType"),
    (2243, "SessionSecurityDiagnosticsArrayType"),
    (2244, "SessionSecurityDiagnosticsType"),
    (2253, "Server"),
    (2254, "Server_ServerArray"),
    (2255, "Server_NamespaceArray"),
    (2256, "Server_ServerStatus"),
    (2257, "Server_ServerStatus_StartTime"),
    (2258, "Server_ServerStatus_CurrentTime"),
    (2259, "Server_ServerStatus_State"),
    (2260, "Server_ServerStatus_BuildInfo"),
    (2261, "Server_ServerStatus_BuildInfo_ProductName"),
    (2262, "Server_ServerStatus_BuildInfo_ProductUri"),
    (2263, "Server_ServerStatus_BuildInfo_ManufacturerName"),
    (2264, "Server_ServerStatus_BuildInfo_SoftwareVersion"),
    (2265, "Server_ServerStatus_BuildInfo_BuildNumber"),
    (2266, "Server_ServerStatus_BuildInfo_BuildDate"),
    (2267, "Server_ServiceLevel"),
    (2268, "Server_ServerCapabilities"),
    (2269, "Server_ServerCapabilities_ServerProfileArray"),
    (2271, "Server_ServerCapabilities_LocaleIdArray"),
    (2272, "Server_ServerCapabilities_MinSupportedSampleRate"),
    (2274, "Server_ServerDiagnostics"),
    (2275, "Server_ServerDiagnostics_ServerDiagnosticsSummary"),
    (2289, "Server_ServerDiagnostics_SamplingIntervalDiagnosticsArray"),
    (2290, "Server_ServerDiagnostics_SubscriptionDiagnosticsArray"),
    (2294, "Server_ServerDiagnostics_EnabledFlag"),
    (2295, "Server_VendorServerInfo"),
    (2296, "Server_ServerRedundancy"),
    (2299, "StateMachineType"),
    (2307, "StateType"),
    (2309, "InitialStateType"),
    (2310, "TransitionType"),
    (2311, "TransitionEventType"),
    (2315, "AuditUpdateStateEventType"),
    (2318, "HistoricalDataConfigurationType"),
    (2330, "HistoryServerCapabilitiesType"),
    (2340, "AggregateFunctionType"),
    (2365, "DataItemType"),
    (2368, "AnalogItemType"),
    (2372, "DiscreteItemType"),
    (2373, "TwoStateDiscreteType"),
    (2376, "MultiStateDiscreteType"),
    (2378, "ProgramTransitionEventType"),
    (2380, "ProgramDiagnosticType"),
    (2391, "ProgramStateMachineType"),
    (2738, "SemanticChangeEventType"),
    (2755, "StateVariableType"),
    (2760, "FiniteStateVariableType"),
    (2762, "TransitionVariableType"),
    (2767, "FiniteTransitionVariableType"),
    (2771, "FiniteStateMachineType"),
    (2782, "ConditionType"),
    (2787, "RefreshStartEventType"),
    (2788, "RefreshEndEventType"),
    (2789, "RefreshRequiredEventType"),
    (2790, "AuditConditionEventType"),
    (2803, "AuditConditionEnableEventType"),
    (2829, "AuditConditionCommentEventType"),
    (2830, "DialogConditionType"),
    (2881, "AcknowledgeableConditionType"),
    (2915, "AlarmConditionType"),
    (2929, "ShelvedStateMachineType"),
    (2955, "LimitAlarmType"),
    (2992, "Server_ServerStatus_SecondsTillShutdown"),
    (2993, "Server_ServerStatus_ShutdownReason"),
    (2994, "Server_Auditing"),
    (3048, "EventTypesFolder"),
    (3062, "DefaultBinary"),
    (3063, "DefaultXml"),
    (3065, "AlwaysGeneratesEvent"),
    (3068, "NodeVersion"),
    (3069, "LocalTime"),
    (3070, "AllowNulls"),
    (3071, "EnumValues"),
    (3072, "InputArguments"),
    (3073, "OutputArguments"),
    (7594, "EnumValueType"),
    (8912, "TimeZoneDataType"),
    (8995, "TwoStateVariableType"),
    (9002, "ConditionVariableType"),
    (9004, "HasTrueSubState"),
    (9005, "HasFalseSubState"),
    (9006, "HasCondition"),
    (9318, "ExclusiveLimitStateMachineType"),
    (9341, "ExclusiveLimitAlarmType"),
    (9482, "ExclusiveLevelAlarmType"),
    (9623, "ExclusiveRateOfChangeAlarmType"),
    (9764, "ExclusiveDeviationAlarmType"),
    (9906, "NonExclusiveLimitAlarmType"),
    (10060, "NonExclusiveLevelAlarmType"),
    (10214, "NonExclusiveRateOfChangeAlarmType"),
    (10368, "NonExclusiveDeviationAlarmType"),
    (10523, "DiscreteAlarmType"),
    (10637, "OffNormalAlarmType"),
    (10751, "TripAlarmType"),
    (11093, "AuditConditionShelvingEventType"),
    (11163, "BaseConditionClassType"),
    (11164, "ProcessConditionClassType"),
    (11165, "MaintenanceConditionClassType"),
    (11166, "SystemConditionClassType"),
    (11187, "AggregateConfigurationType"),
    (11238, "MultiStateValueDiscreteType"),
    (11432, "EnumStrings"),
    (11487, "OptionSetType"),
    (11492, "Server_GetMonitoredItems"),
    (11498, "MaxStringLength"),
    (11508, "ModellingRule_OptionalPlaceholder"),
    (11510, "ModellingRule_MandatoryPlaceholder"),
    (11564, "OperationLimitsType"),
    (11575, "FileType"),
    (11595, "AddressSpaceFileType"),
    (11616, "NamespaceMetadataType"),
    (11645, "NamespacesType"),
    (11704, "Server_ServerCapabilities_OperationLimits"),
    (11715, "Server_Namespaces"),
    (11737, "BitFieldMaskDataType"),
    (12021, "ArrayItemType"),
    (12029, "YArrayItemType"),
    (12038, "XYArrayItemType"),
    (12047, "ImageItemType"),
    (12057, "CubeItemType"),
    (12068, "NDimensionArrayItemType"),
    (12077, "AxisScaleEnumeration"),
    (12079, "AxisInformation"),
    (12080, "XVType"),
    (12171, "ComplexNumberType"),
    (12172, "DoubleComplexNumberType"),
    (12189, "ServerOnNetwork"),
    (12745, "OptionSetValues"),
    (12755, "OptionSet"),
    (12756, "Union"),
    (12908, "MaxByteStringLength"),
    (14533, "KeyValuePair"),
    (15528, "EndpointType"),
    (17602, "BaseInterfaceType"),
    (17603, "HasInterface"),
    (17604, "HasAddIn"),
];
