use alloy_sol_types::sol;

sol! {
    /// @notice A required consumable and the amount burned per provided unit batch.
    #[derive(Debug, PartialEq, Eq)]
    struct ConsumableAmount {
        // Address of the consumable contract
        address consumable;
        // The amount that must be burned
        uint256 amount;
    }

    /// @notice A rule converting a set of required consumables into the provided consumable.
    #[derive(Debug, PartialEq, Eq)]
    struct ConsumableCombination {
        ConsumableAmount[] requiredConsumables;
        // The amount of the provided consumable minted when the combination is satisfied
        uint256 amountProvided;
    }

    /// @notice The facet that mints the provided consumable from registered combinations.
    interface IConsumableProviderFacet {
        error CombinationNotFound();
        error DuplicateCombinationKey();
        error InvalidCombination();
        error InsufficientBalance(address consumable, uint256 required, uint256 available);
        error AmountOverflow();
        error ZeroProvideAmount();

        function setConsumableCombinations(ConsumableCombination[] calldata combinations) external;
        function addConsumableCombination(ConsumableCombination calldata combination) external;
        function removeConsumableCombination(address[] calldata requiredConsumables) external;
        function validConsumableCombinations() external view returns (ConsumableCombination[] memory combinations);
    }

    /// @notice EIP-2535 diamond cut interface.
    interface IDiamondCut {
        enum FacetCutAction {
            Add,
            Replace,
            Remove
        }

        struct FacetCut {
            address facetAddress;
            FacetCutAction action;
            bytes4[] functionSelectors;
        }

        function diamondCut(FacetCut[] calldata cuts, address init, bytes calldata initCalldata) external;
    }
}
